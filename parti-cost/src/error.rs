use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("range {start}..={end} contains no n")]
    EmptyRange { start: u64, end: u64 },
    #[error("failed to write table to {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
