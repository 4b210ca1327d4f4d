//! Error types for the columnar writer.

use arrow::error::ArrowError;
use datahobbit_core::ColumnKind;
use parquet::errors::ParquetError;
use thiserror::Error;

/// A synthesised value that cannot be stored in its declared column.
///
/// This only happens when the record stream and the schema disagree, so it is
/// always fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// The record does not have one value per column.
    #[error("Record {index} has {actual} values, schema has {expected} columns")]
    FieldCount {
        index: u64,
        expected: usize,
        actual: usize,
    },

    /// The value's kind differs from the column's kind.
    #[error("Record {index}: column '{column}' expects {expected}, got {actual}")]
    TypeMismatch {
        index: u64,
        column: String,
        expected: ColumnKind,
        actual: ColumnKind,
    },
}

/// Errors that can occur while writing columnar output.
#[derive(Error, Debug)]
pub enum ParquetWriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parquet encoding or footer error.
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Arrow array construction error.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A value did not match its column type.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}
