//! Delimited writer: one record per line, a single output file.

use crate::error::CsvWriterError;
use crate::format::CsvValue;
use csv::{Terminator, WriterBuilder};
use datahobbit_core::{Record, Schema};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for delimited writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes records as delimiter-separated text.
pub struct DelimitedWriter<'a> {
    schema: &'a Schema,
    delimiter: u8,
    include_header: bool,
}

impl<'a> DelimitedWriter<'a> {
    /// Create a writer for `schema` using a one-byte delimiter.
    ///
    /// The header row defaults to whatever the schema document asked for.
    pub fn new(schema: &'a Schema, delimiter: u8) -> Self {
        Self {
            schema,
            delimiter,
            include_header: schema.header(),
        }
    }

    /// Set whether to include a header row of field names.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write every record to `output_path`, replacing any existing file.
    ///
    /// Each record becomes exactly one `\n`-terminated line. Fields holding the
    /// delimiter, a quote or a line break are quoted. An error aborts the write
    /// before the next record is started.
    pub fn write<I, P>(&self, records: I, output_path: P) -> Result<WriteMetrics, CsvWriterError>
    where
        I: IntoIterator<Item = Record>,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();
        let output_path = output_path.as_ref();

        info!(
            "Writing delimited file '{}' ({} columns, delimiter {:?})",
            output_path.display(),
            self.schema.len(),
            char::from(self.delimiter)
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buf_writer);

        if self.include_header {
            writer.write_record(self.schema.field_names())?;
        }

        let fields = self.schema.fields();
        let mut line: Vec<String> = Vec::with_capacity(fields.len());

        for record in records {
            if record.len() != fields.len() {
                return Err(CsvWriterError::FieldCount {
                    index: record.index,
                    expected: fields.len(),
                    actual: record.len(),
                });
            }

            line.clear();
            line.extend(
                record
                    .values
                    .iter()
                    .zip(fields)
                    .map(|(value, field)| CsvValue::render(value, field).into_inner()),
            );
            writer.write_record(&line)?;

            metrics.rows_written += 1;
            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer.into_inner().map_err(|e| e.into_error())?);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Delimited write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
