//! Delimited-text output for datahobbit.
//!
//! This crate writes the record stream produced by `datahobbit-generator` as
//! delimiter-separated text, one record per line, and can read such a file
//! back into typed records.
//!
//! # Example
//!
//! ```ignore
//! use datahobbit_core::Schema;
//! use datahobbit_csv::DelimitedWriter;
//! use datahobbit_generator::{produce, RandomSource};
//!
//! let schema = Schema::from_file("schema.json")?;
//! let records = produce(&schema, 1000, RandomSource::new(42));
//!
//! let metrics = DelimitedWriter::new(&schema, b',')
//!     .with_header(true)
//!     .write(records, "/path/to/output.csv")?;
//! ```

mod error;
mod format;
mod reader;
mod writer;

pub use error::CsvWriterError;
pub use format::{parse_value, CsvParseError, CsvValue};
pub use reader::read_records;
pub use writer::{DelimitedWriter, WriteMetrics, DEFAULT_BUFFER_SIZE};
