//! datahobbit library
//!
//! Generates synthetic tabular datasets from a declarative schema and writes
//! them as delimited text or as size-bounded Parquet files.
//!
//! # Pipeline
//!
//! Each stage lives in its own crate:
//!
//! - `datahobbit_core` - schema model, values and records
//! - `datahobbit_generator` - value synthesis and the record stream
//! - `datahobbit_csv` - delimited writer
//! - `datahobbit_parquet` - columnar writer and file splitter
//!
//! [`generate`] is the composition boundary: it validates a fixed set of
//! options, loads the schema, builds the record stream and hands it to the
//! writer selected by [`OutputFormat`].
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 comma-separated rows in people.csv
//! datahobbit schema.json people.csv --records 1000
//!
//! # 1M rows as Parquet, split into files of at most 10 MiB
//! datahobbit schema.json out/people --records 1000000 --format parquet \
//!   --max-file-size 10485760
//! ```

use clap::ValueEnum;
use datahobbit_core::{Record, Schema, SchemaError};
use datahobbit_csv::{CsvWriterError, DelimitedWriter};
use datahobbit_generator::{produce, ParallelRecordStream, RandomSource};
use datahobbit_parquet::{ColumnarWriter, EncodingError, ParquetWriterError};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Default size limit for columnar output files (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Delimiter-separated text, a single file
    #[value(name = "csv")]
    Delimited,
    /// Parquet, split into `{prefix}_{index}.parquet` files
    #[value(name = "parquet")]
    Columnar,
}

impl OutputFormat {
    /// The name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Columnar => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a run needs; supplied by the CLI or by library callers.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Schema document (JSON, or YAML for `.yaml`/`.yml`)
    pub schema_path: PathBuf,
    /// Output file (delimited) or file prefix (columnar)
    pub output_prefix: String,
    pub record_count: u64,
    /// Field delimiter; only used for delimited output
    pub delimiter: char,
    pub format: OutputFormat,
    /// Columnar size limit in bytes; 0 means a single unbounded file
    pub max_file_size: u64,
    pub seed: u64,
    /// Force a header row in delimited output
    pub include_header: bool,
    /// Synthesise records on the rayon pool
    pub parallel: bool,
}

impl GenerateOptions {
    /// Options with the CLI defaults for everything but the three required values.
    pub fn new(
        schema_path: impl Into<PathBuf>,
        output_prefix: impl Into<String>,
        record_count: u64,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_prefix: output_prefix.into(),
            record_count,
            delimiter: ',',
            format: OutputFormat::Delimited,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            seed: RandomSource::DEFAULT_SEED,
            include_header: false,
            parallel: false,
        }
    }

    /// Check the caller-supplied parameters before any work starts.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.output_prefix.is_empty() {
            return Err(GenerateError::Validation(
                "output path must not be empty".to_string(),
            ));
        }
        if self.format == OutputFormat::Delimited {
            self.delimiter_byte()?;
        }
        Ok(())
    }

    /// The delimiter as the single byte written to the file.
    ///
    /// Multi-byte characters are rejected rather than truncated, as are the
    /// quote character and line breaks, which would make lines ambiguous.
    pub fn delimiter_byte(&self) -> Result<u8, GenerateError> {
        let c = self.delimiter;
        if c.len_utf8() != 1 {
            return Err(GenerateError::Validation(format!(
                "delimiter must be a single one-byte character, got {c:?}"
            )));
        }
        if matches!(c, '"' | '\r' | '\n') {
            return Err(GenerateError::Validation(format!(
                "delimiter {c:?} cannot be used, it conflicts with quoting or line breaks"
            )));
        }
        Ok(c as u8)
    }
}

/// A file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub format: OutputFormat,
    pub rows_written: u64,
    /// Output files in index order.
    pub files: Vec<GeneratedFile>,
    pub duration: Duration,
}

impl GenerateReport {
    /// Combined size of all output files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Why a run failed, by stage.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The schema could not be loaded or is invalid.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A caller-supplied parameter is invalid.
    #[error("Invalid option: {0}")]
    Validation(String),

    /// Creating, writing or closing an output file failed.
    #[error("Failed to write '{path}'")]
    Io {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A synthesised value did not match its declared column type.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl GenerateError {
    fn io(path: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io {
            path: path.to_string(),
            source: Box::new(source),
        }
    }

    fn from_csv(path: &str, err: CsvWriterError) -> Self {
        match err {
            CsvWriterError::FieldCount {
                index,
                expected,
                actual,
            } => Self::Encoding(EncodingError::FieldCount {
                index,
                expected,
                actual,
            }),
            other => Self::io(path, other),
        }
    }

    fn from_parquet(prefix: &str, err: ParquetWriterError) -> Self {
        match err {
            ParquetWriterError::Encoding(e) => Self::Encoding(e),
            other => Self::io(prefix, other),
        }
    }
}

/// Run the whole pipeline: validate, load the schema, synthesise, write.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    options.validate()?;

    let schema = Schema::from_file(&options.schema_path)?;
    schema
        .check_sequences(options.record_count)
        .map_err(|e| GenerateError::Validation(e.to_string()))?;
    let source = RandomSource::new(options.seed);

    info!(
        "Generating {} records ({} columns) as {} into '{}' with seed {}",
        options.record_count,
        schema.len(),
        options.format,
        options.output_prefix,
        options.seed
    );

    if options.parallel {
        let records = ParallelRecordStream::new(&schema, options.record_count, source);
        write_output(&schema, options, records)
    } else {
        let records = produce(&schema, options.record_count, source);
        write_output(&schema, options, records)
    }
}

fn write_output<I>(
    schema: &Schema,
    options: &GenerateOptions,
    records: I,
) -> Result<GenerateReport, GenerateError>
where
    I: Iterator<Item = Record>,
{
    let start_time = Instant::now();
    let prefix = options.output_prefix.as_str();

    let (rows_written, files) = match options.format {
        OutputFormat::Delimited => {
            let delimiter = options.delimiter_byte()?;
            let metrics = DelimitedWriter::new(schema, delimiter)
                .with_header(options.include_header || schema.header())
                .write(records, prefix)
                .map_err(|e| GenerateError::from_csv(prefix, e))?;

            let file = GeneratedFile {
                path: PathBuf::from(prefix),
                rows: metrics.rows_written,
                bytes: metrics.file_size_bytes,
            };
            (metrics.rows_written, vec![file])
        }
        OutputFormat::Columnar => {
            let metrics = ColumnarWriter::new(schema, options.max_file_size)
                .write(records, prefix)
                .map_err(|e| GenerateError::from_parquet(prefix, e))?;

            let files = metrics
                .files
                .into_iter()
                .map(|f| GeneratedFile {
                    path: f.path,
                    rows: f.rows,
                    bytes: f.bytes,
                })
                .collect();
            (metrics.rows_written, files)
        }
    };

    Ok(GenerateReport {
        format: options.format,
        rows_written,
        files,
        duration: start_time.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat, delimiter: char) -> GenerateOptions {
        GenerateOptions {
            format,
            delimiter,
            ..GenerateOptions::new("schema.json", "out", 10)
        }
    }

    #[test]
    fn test_defaults() {
        let opts = GenerateOptions::new("s.json", "o.csv", 5);
        assert_eq!(opts.delimiter, ',');
        assert_eq!(opts.format, OutputFormat::Delimited);
        assert_eq!(opts.max_file_size, 100 * 1024 * 1024);
        assert_eq!(opts.seed, 42);
        assert!(!opts.include_header);
        assert!(!opts.parallel);
    }

    #[test]
    fn test_delimiter_validation() {
        assert_eq!(options(OutputFormat::Delimited, '|').delimiter_byte().unwrap(), b'|');
        assert_eq!(options(OutputFormat::Delimited, '\t').delimiter_byte().unwrap(), b'\t');

        for bad in ['é', '→', '"', '\n', '\r'] {
            assert!(
                matches!(
                    options(OutputFormat::Delimited, bad).validate(),
                    Err(GenerateError::Validation(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_delimiter_ignored_for_parquet() {
        assert!(options(OutputFormat::Columnar, 'é').validate().is_ok());
    }

    #[test]
    fn test_empty_output_rejected() {
        let opts = GenerateOptions::new("schema.json", "", 1);
        assert!(matches!(opts.validate(), Err(GenerateError::Validation(_))));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::Delimited.to_string(), "csv");
        assert_eq!(
            OutputFormat::from_str("parquet", false).unwrap(),
            OutputFormat::Columnar
        );
        assert!(OutputFormat::from_str("xlsx", false).is_err());
    }

    #[test]
    fn test_csv_field_count_is_encoding_error() {
        let err = GenerateError::from_csv(
            "out.csv",
            CsvWriterError::FieldCount {
                index: 4,
                expected: 2,
                actual: 1,
            },
        );
        assert!(matches!(err, GenerateError::Encoding(_)));
    }
}
