//! Columnar (Parquet) output for datahobbit.
//!
//! Records are buffered column-wise into row groups of [`ROWS_PER_GROUP`]
//! rows. Before a group is flushed, its encoded size is estimated and the
//! [`FileSplitter`] decides whether it still fits in the active file or the
//! file must be closed and the next one opened.
//!
//! ```text
//! Record stream ──▶ RowGroup (5000 rows, arrow builders)
//!                      │ full
//!                      ▼
//!             trial encode ──▶ estimate
//!                      │
//!         FileSplitter::rotation_reason?
//!            │ none            │ size / row-group cap
//!            ▼                 ▼
//!    flush to {prefix}_N   close N (footer), open N+1, flush
//! ```
//!
//! Output files are named `{prefix}_{index}.parquet`, starting at index 0.
//! A maximum file size of 0 means unbounded (a single file).

mod error;
mod reader;
mod row_group;
pub mod schema;
pub mod splitter;
mod writer;

pub use error::{EncodingError, ParquetWriterError};
pub use reader::{count_decoded_rows, read_arrow_schema, read_row_count};
pub use row_group::RowGroup;
pub use splitter::{
    next_file_path, should_rotate, FileSplitter, RotationReason, WriterState,
    MAX_ROW_GROUPS_PER_FILE,
};
pub use writer::{ColumnarMetrics, ColumnarWriter, OutputFile, ROWS_PER_GROUP};
