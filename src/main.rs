//! Command-line interface for datahobbit
//!
//! # Usage Examples
//!
//! ```bash
//! # 1000 comma-separated rows with a header
//! datahobbit schema.json people.csv --records 1000 --header
//!
//! # Pipe-separated, reproducible with a custom seed
//! datahobbit schema.json people.txt -r 500 -d '|' --seed 7
//!
//! # Parquet files of at most 10 MiB: out/people_0.parquet, out/people_1.parquet, ...
//! datahobbit schema.json out/people -r 1000000 --format parquet --max-file-size 10485760
//! ```
//!
//! Set `RUST_LOG=datahobbit=debug` for progress output.

use anyhow::Context;
use clap::Parser;
use datahobbit::{generate, GenerateOptions, OutputFormat, DEFAULT_MAX_FILE_SIZE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datahobbit")]
#[command(version)]
#[command(about = "Generates CSV or Parquet files from a JSON schema")]
#[command(long_about = None)]
struct Cli {
    /// JSON schema describing the columns to generate
    schema: PathBuf,

    /// Output file (csv) or output file prefix (parquet)
    output: String,

    /// Number of records to generate
    #[arg(short, long)]
    records: u64,

    /// Field delimiter for CSV output (a single one-byte character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Maximum size of each Parquet file in bytes (0 = unbounded)
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_file_size: u64,

    /// Random seed; identical seeds produce identical output
    #[arg(long, default_value_t = 42, env = "DATAHOBBIT_SEED")]
    seed: u64,

    /// Write a header row of column names (CSV only)
    #[arg(long)]
    header: bool,

    /// Synthesise records on all cores
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            schema_path: self.schema,
            output_prefix: self.output,
            record_count: self.records,
            delimiter: self.delimiter,
            format: self.format,
            max_file_size: self.max_file_size,
            seed: self.seed,
            include_header: self.header,
            parallel: self.parallel,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = cli.into_options();

    let report = generate(&options).with_context(|| {
        format!(
            "Failed to generate {} output from {:?}",
            options.format, options.schema_path
        )
    })?;

    for file in &report.files {
        println!("{} ({} rows, {} bytes)", file.path.display(), file.rows, file.bytes);
    }
    println!(
        "Generated {} records in {} file(s), {} bytes in {:?}",
        report.rows_written,
        report.files.len(),
        report.total_bytes(),
        report.duration
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["datahobbit", "s.json", "out.csv", "-r", "3"]).unwrap();
        let options = cli.into_options();

        assert_eq!(options.record_count, 3);
        assert_eq!(options.delimiter, ',');
        assert_eq!(options.format, OutputFormat::Delimited);
        assert_eq!(options.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(!options.include_header);
    }

    #[test]
    fn test_cli_parquet() {
        let cli = Cli::try_parse_from([
            "datahobbit",
            "s.json",
            "out/p",
            "--records",
            "10",
            "--format",
            "parquet",
            "--max-file-size",
            "0",
            "--seed",
            "9",
            "--parallel",
        ])
        .unwrap();
        let options = cli.into_options();

        assert_eq!(options.format, OutputFormat::Columnar);
        assert_eq!(options.max_file_size, 0);
        assert_eq!(options.seed, 9);
        assert!(options.parallel);
    }

    #[test]
    fn test_cli_requires_records() {
        assert!(Cli::try_parse_from(["datahobbit", "s.json", "out.csv"]).is_err());
    }
}
