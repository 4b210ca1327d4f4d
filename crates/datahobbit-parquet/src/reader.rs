//! Read-back helpers for verifying columnar output.

use crate::error::ParquetWriterError;
use arrow::datatypes::SchemaRef;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use std::fs::File;
use std::path::Path;

/// Number of rows recorded in a Parquet file's footer.
pub fn read_row_count<P: AsRef<Path>>(path: P) -> Result<u64, ParquetWriterError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    footer_row_count(builder.metadata().file_metadata().num_rows())
}

fn footer_row_count(rows: i64) -> Result<u64, ParquetWriterError> {
    u64::try_from(rows).map_err(|_| {
        ParquetError::General(format!("footer reports a negative row count ({rows})")).into()
    })
}

/// Arrow schema stored in a Parquet file.
pub fn read_arrow_schema<P: AsRef<Path>>(path: P) -> Result<SchemaRef, ParquetWriterError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    Ok(builder.schema().clone())
}

/// Rows counted by decoding every batch, rather than trusting the footer.
pub fn count_decoded_rows<P: AsRef<Path>>(path: P) -> Result<u64, ParquetWriterError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut rows = 0u64;
    for batch in reader {
        rows += batch?.num_rows() as u64;
    }
    Ok(rows)
}
