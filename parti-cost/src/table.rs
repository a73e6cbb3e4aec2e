//! One row per n: the minimum cost and the partitions attaining it, dumped
//! as CSV.

use std::{io::Write, ops::RangeInclusive, path::Path};

use csv::{Terminator, WriterBuilder};
use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::{
    error::Error,
    partition::count_partitions,
    selector::{find_min_sums_and_partitions, CostResult},
};

pub const DEFAULT_START: u64 = 2;
pub const DEFAULT_END: u64 = 100;
pub const DEFAULT_OUTPUT: &str = "partition_table_with_min_sum.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub n: u64,
    pub result: CostResult,
}

impl Row {
    /// e.g. `[[3, 1], [2, 2], [2, 1, 1]]`
    pub fn partitions_cell(&self) -> String {
        format!("[{}]", self.result.partitions.iter().join(", "))
    }
}

/// Serialized shape of a [`Row`], field names double as the CSV header.
#[derive(Debug, Serialize)]
struct CsvRecord {
    n: u64,
    #[serde(rename = "Min Sum")]
    min_sum: u64,
    #[serde(rename = "Partitions")]
    partitions: String,
}

impl From<&Row> for CsvRecord {
    fn from(row: &Row) -> Self {
        Self {
            n: row.n,
            min_sum: row.result.min_cost,
            partitions: row.partitions_cell(),
        }
    }
}

fn csv_writer() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.terminator(Terminator::Any(b'\n'));
    builder
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<Row>,
}

impl ResultTable {
    pub fn generate(range: RangeInclusive<u64>) -> Result<Self, Error> {
        if range.is_empty() {
            return Err(Error::EmptyRange {
                start: *range.start(),
                end: *range.end(),
            });
        }
        let rows = range
            .map(|n| {
                info!("n={n}: scoring {} partitions", count_partitions(n));
                Row {
                    n,
                    result: find_min_sums_and_partitions(n),
                }
            })
            .collect_vec();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        self.write_records(csv_writer().from_writer(writer))
    }

    /// Truncates `path` if it already exists.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let to_error = |source| Error::Csv {
            path: path.to_path_buf(),
            source,
        };
        let writer = csv_writer().from_path(path).map_err(to_error)?;
        self.write_records(writer).map_err(to_error)
    }

    fn write_records<W: Write>(&self, mut writer: csv::Writer<W>) -> Result<(), csv::Error> {
        for row in &self.rows {
            writer.serialize(CsvRecord::from(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}
