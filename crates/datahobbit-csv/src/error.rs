//! Error types for the delimited writer.

use crate::format::CsvParseError;
use thiserror::Error;

/// Errors that can occur while writing or reading delimited output.
#[derive(Error, Debug)]
pub enum CsvWriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field could not be parsed back into its declared type.
    #[error("Parse error: {0}")]
    Parse(#[from] CsvParseError),

    /// A record does not have one value per schema field.
    #[error("Record {index} has {actual} values, schema has {expected} fields")]
    FieldCount {
        index: u64,
        expected: usize,
        actual: usize,
    },
}
