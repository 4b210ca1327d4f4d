//! Columnar writer: row groups encoded to Parquet with size-bounded rollover.

use crate::error::ParquetWriterError;
use crate::row_group::RowGroup;
use crate::schema::arrow_schema;
use crate::splitter::FileSplitter;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use datahobbit_core::{Record, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Rows buffered per row group before it is encoded and flushed.
pub const ROWS_PER_GROUP: usize = 5000;

/// Footer bytes reserved per column chunk on top of the measured share.
///
/// Offsets stored in the footer grow with the file, so the real footer of a
/// large file can be slightly bigger than the trial one.
const FOOTER_SLACK_PER_COLUMN: u64 = 32;

/// Footer bytes reserved per row group on top of the per-column slack.
const FOOTER_SLACK_PER_GROUP: u64 = 32;

/// A file produced by a columnar run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub rows: u64,
    pub row_groups: usize,
    /// Final size on disk.
    pub bytes: u64,
}

/// Metrics from a columnar write.
#[derive(Debug, Clone, Default)]
pub struct ColumnarMetrics {
    /// Number of rows written across all files.
    pub rows_written: u64,
    /// Output files in index order.
    pub files: Vec<OutputFile>,
    /// Total time taken.
    pub total_duration: Duration,
}

impl ColumnarMetrics {
    /// Combined size of all output files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Estimated contribution of one row group to a file.
#[derive(Debug, Clone, Copy)]
struct GroupEstimate {
    /// Encoded column chunks.
    data: u64,
    /// Footer share, including slack.
    footer: u64,
}

impl GroupEstimate {
    fn total(&self) -> u64 {
        self.data + self.footer
    }
}

/// The active output file.
struct OpenFile {
    path: PathBuf,
    writer: ArrowWriter<BufWriter<File>>,
    rows: u64,
    row_groups: usize,
}

/// Writes records to one or more Parquet files of bounded size.
pub struct ColumnarWriter<'a> {
    schema: &'a Schema,
    arrow_schema: SchemaRef,
    props: WriterProperties,
    max_file_size: u64,
    rows_per_group: usize,
}

impl<'a> ColumnarWriter<'a> {
    /// Create a writer; a `max_file_size` of 0 means a single unbounded file.
    pub fn new(schema: &'a Schema, max_file_size: u64) -> Self {
        Self::with_rows_per_group(schema, max_file_size, ROWS_PER_GROUP)
    }

    fn with_rows_per_group(schema: &'a Schema, max_file_size: u64, rows_per_group: usize) -> Self {
        let rows_per_group = rows_per_group.max(1);
        let props = WriterProperties::builder()
            .set_max_row_group_size(rows_per_group)
            .set_statistics_enabled(EnabledStatistics::Chunk)
            .build();

        Self {
            schema,
            arrow_schema: arrow_schema(schema),
            props,
            max_file_size,
            rows_per_group,
        }
    }

    /// Write every record, splitting output into `{prefix}_{index}.parquet`.
    ///
    /// File 0 is always created, so an empty stream still yields one valid
    /// file. Every file is closed with a complete footer; a row group is never
    /// split across files.
    pub fn write<I>(&self, records: I, output_prefix: &str) -> Result<ColumnarMetrics, ParquetWriterError>
    where
        I: IntoIterator<Item = Record>,
    {
        let start_time = Instant::now();
        let mut metrics = ColumnarMetrics::default();
        let mut splitter = FileSplitter::new(output_prefix, self.max_file_size);

        info!(
            "Writing Parquet output '{}_*.parquet' ({} columns, max file size {})",
            output_prefix,
            self.schema.len(),
            describe_limit(self.max_file_size)
        );

        let mut current = self.open_file(splitter.current_path(), &mut splitter)?;
        let mut group = RowGroup::new(self.schema, self.arrow_schema.clone(), self.rows_per_group);

        for record in records {
            group.push(&record)?;
            if group.is_full() {
                current = self.flush_group(&mut group, current, &mut splitter, &mut metrics)?;
            }
        }

        if !group.is_empty() {
            current = self.flush_group(&mut group, current, &mut splitter, &mut metrics)?;
        }

        metrics.files.push(self.close_file(current)?);
        metrics.total_duration = start_time.elapsed();

        info!(
            "Parquet write complete: {} rows in {} files, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.files.len(),
            metrics.total_bytes(),
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Encode the buffered group into the active file, rotating first if the
    /// group would push the file past its limit.
    fn flush_group(
        &self,
        group: &mut RowGroup,
        mut current: OpenFile,
        splitter: &mut FileSplitter,
        metrics: &mut ColumnarMetrics,
    ) -> Result<OpenFile, ParquetWriterError> {
        let batch = group.finish()?;
        let estimate = self.estimate(&batch)?;

        if let Some(reason) = splitter.rotation_reason(estimate.total()) {
            metrics.files.push(self.close_file(current)?);
            let path = splitter.rotate(reason);
            current = self.open_file(path, splitter)?;
        }

        let before = current.writer.bytes_written() as u64;
        current.writer.write(&batch)?;
        current.writer.flush()?;
        let data = current.writer.bytes_written() as u64 - before;

        let rows = batch.num_rows() as u64;
        current.rows += rows;
        current.row_groups += 1;
        metrics.rows_written += rows;
        splitter.record_row_group(data + estimate.footer);

        debug!(
            file_index = splitter.state().active_file_index,
            rows,
            data_bytes = data,
            projected_file_bytes = splitter.state().bytes_written_current_file,
            "Flushed row group; {} rows written",
            metrics.rows_written
        );

        Ok(current)
    }

    /// Measure a group by encoding it on its own into an in-memory file.
    ///
    /// The trial file's bytes after the column chunks are that group's footer
    /// share. It repeats the schema and metadata a real file carries once, so
    /// summing shares over a file over-approximates its real footer.
    fn estimate(&self, batch: &RecordBatch) -> Result<GroupEstimate, ParquetWriterError> {
        let mut trial = ArrowWriter::try_new(
            Vec::new(),
            self.arrow_schema.clone(),
            Some(self.props.clone()),
        )?;
        let start = trial.bytes_written() as u64;
        trial.write(batch)?;
        trial.flush()?;
        let data = trial.bytes_written() as u64 - start;
        let total = trial.into_inner()?.len() as u64;

        let columns = self.schema.len() as u64;
        let footer = total.saturating_sub(start + data)
            + columns * FOOTER_SLACK_PER_COLUMN
            + FOOTER_SLACK_PER_GROUP;

        Ok(GroupEstimate { data, footer })
    }

    fn open_file(
        &self,
        path: PathBuf,
        splitter: &mut FileSplitter,
    ) -> Result<OpenFile, ParquetWriterError> {
        let file = File::create(&path)?;
        let writer = ArrowWriter::try_new(
            BufWriter::new(file),
            self.arrow_schema.clone(),
            Some(self.props.clone()),
        )?;
        splitter.record_bytes(writer.bytes_written() as u64);

        info!(
            file_index = splitter.state().active_file_index,
            "Opened Parquet file '{}'",
            path.display()
        );

        Ok(OpenFile {
            path,
            writer,
            rows: 0,
            row_groups: 0,
        })
    }

    fn close_file(&self, file: OpenFile) -> Result<OutputFile, ParquetWriterError> {
        let mut inner = file.writer.into_inner()?;
        inner.flush()?;
        drop(inner);

        let bytes = std::fs::metadata(&file.path)?.len();
        info!(
            "Closed Parquet file '{}': {} rows, {} row groups, {} bytes",
            file.path.display(),
            file.rows,
            file.row_groups,
            bytes
        );

        Ok(OutputFile {
            path: file.path,
            rows: file.rows,
            row_groups: file.row_groups,
            bytes,
        })
    }
}

fn describe_limit(max_file_size: u64) -> String {
    if max_file_size == 0 {
        "unbounded".to_string()
    } else {
        format!("{max_file_size} bytes")
    }
}
