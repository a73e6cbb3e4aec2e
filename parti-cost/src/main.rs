use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use parti_cost::{table, ResultTable};

#[derive(Parser)]
#[command(name = "parti-cost")]
#[command(about = "Tabulate the minimum-cost partitions of every n in a range")]
struct Cli {
    /// First n of the table
    #[arg(long, default_value_t = table::DEFAULT_START)]
    start: u64,
    /// Last n of the table, inclusive
    #[arg(long, default_value_t = table::DEFAULT_END)]
    end: u64,
    /// CSV file to write, overwritten if present
    #[arg(long, default_value = table::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let table = ResultTable::generate(cli.start..=cli.end)
        .context("failed to build the minimum cost table")?;
    table.save(&cli.output)?;

    println!("Table saved successfully to: {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_reproduces_the_full_table() {
        let cli = Cli::try_parse_from(["parti-cost"]).unwrap();
        assert_eq!(cli.start, 2);
        assert_eq!(cli.end, 100);
        assert_eq!(cli.output, PathBuf::from("partition_table_with_min_sum.csv"));
    }

    #[test]
    fn overrides() {
        let cli =
            Cli::try_parse_from(["parti-cost", "--start", "3", "--end", "9", "--output", "t.csv"])
                .unwrap();
        assert_eq!((cli.start, cli.end), (3, 9));
        assert_eq!(cli.output, PathBuf::from("t.csv"));
    }

    #[test]
    fn negative_n_is_rejected() {
        assert!(Cli::try_parse_from(["parti-cost", "--start", "-1"]).is_err());
        assert!(Cli::try_parse_from(["parti-cost", "--end=-5"]).is_err());
    }
}
