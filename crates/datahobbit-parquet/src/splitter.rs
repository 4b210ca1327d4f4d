//! File rollover bookkeeping.
//!
//! The splitter owns the [`WriterState`] of a columnar run: which file is
//! active and how many bytes it is expected to hold once closed. The writer
//! asks it before every row-group flush whether the group still fits.

use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Most row groups a single Parquet file may hold (row-group ordinals are i16).
pub const MAX_ROW_GROUPS_PER_FILE: usize = i16::MAX as usize;

/// Whether adding `incoming_bytes` to a file at `current_bytes` would exceed
/// `max_file_size`.
///
/// A `max_file_size` of 0 means unbounded: never rotate.
pub fn should_rotate(current_bytes: u64, incoming_bytes: u64, max_file_size: u64) -> bool {
    max_file_size != 0 && current_bytes.saturating_add(incoming_bytes) > max_file_size
}

/// Path of the `index`-th output file for `prefix`.
pub fn next_file_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{prefix}_{index}.parquet"))
}

/// Why the active file was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationReason {
    /// The next row group would push the file past `max_file_size`.
    SizeLimit,
    /// The file already holds [`MAX_ROW_GROUPS_PER_FILE`] row groups.
    RowGroupLimit,
}

impl fmt::Display for RotationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeLimit => f.write_str("size limit reached"),
            Self::RowGroupLimit => f.write_str("row group limit reached"),
        }
    }
}

/// Mutable state of a columnar run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterState {
    /// Index of the file currently being written, starting at 0.
    pub active_file_index: usize,
    /// Bytes the active file holds so far, including its reserved footer share.
    pub bytes_written_current_file: u64,
    /// Base path every output file is derived from.
    pub output_prefix: String,
}

/// Decides when the active file is full and hands out the next file path.
#[derive(Debug)]
pub struct FileSplitter {
    state: WriterState,
    max_file_size: u64,
    row_groups_current_file: usize,
}

impl FileSplitter {
    /// Start a run at file 0.
    pub fn new(output_prefix: impl Into<String>, max_file_size: u64) -> Self {
        Self {
            state: WriterState {
                active_file_index: 0,
                bytes_written_current_file: 0,
                output_prefix: output_prefix.into(),
            },
            max_file_size,
            row_groups_current_file: 0,
        }
    }

    /// Current state of the run.
    pub fn state(&self) -> &WriterState {
        &self.state
    }

    /// Configured limit; 0 means unbounded.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Row groups flushed to the active file.
    pub fn row_groups_current_file(&self) -> usize {
        self.row_groups_current_file
    }

    /// Path of the active file.
    pub fn current_path(&self) -> PathBuf {
        next_file_path(&self.state.output_prefix, self.state.active_file_index)
    }

    /// Why a row group of `incoming_bytes` must go to a new file, if it must.
    ///
    /// An empty file always accepts the group, so a group larger than the
    /// limit on its own still gets written, alone in its file.
    pub fn rotation_reason(&self, incoming_bytes: u64) -> Option<RotationReason> {
        if self.row_groups_current_file == 0 {
            None
        } else if self.row_groups_current_file >= MAX_ROW_GROUPS_PER_FILE {
            Some(RotationReason::RowGroupLimit)
        } else if should_rotate(
            self.state.bytes_written_current_file,
            incoming_bytes,
            self.max_file_size,
        ) {
            Some(RotationReason::SizeLimit)
        } else {
            None
        }
    }

    /// Whether a row group of `incoming_bytes` must go to a new file.
    pub fn needs_rotation(&self, incoming_bytes: u64) -> bool {
        self.rotation_reason(incoming_bytes).is_some()
    }

    /// Account for bytes written outside any row group (file header).
    pub fn record_bytes(&mut self, bytes: u64) {
        self.state.bytes_written_current_file += bytes;
    }

    /// Account for a row group flushed to the active file.
    pub fn record_row_group(&mut self, bytes: u64) {
        self.state.bytes_written_current_file += bytes;
        self.row_groups_current_file += 1;
    }

    /// Move to the next file and return its path.
    pub fn rotate(&mut self, reason: RotationReason) -> PathBuf {
        info!(
            file_index = self.state.active_file_index,
            projected_bytes = self.state.bytes_written_current_file,
            row_groups = self.row_groups_current_file,
            "Rotating output file: {reason}"
        );
        self.state.active_file_index += 1;
        self.state.bytes_written_current_file = 0;
        self.row_groups_current_file = 0;
        self.current_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_rotate() {
        assert!(!should_rotate(100, 50, 200));
        assert!(!should_rotate(100, 100, 200));
        assert!(should_rotate(100, 101, 200));
        assert!(should_rotate(u64::MAX, 1, 200));
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        assert!(!should_rotate(u64::MAX, u64::MAX, 0));

        let mut splitter = FileSplitter::new("out", 0);
        splitter.record_row_group(1 << 40);
        assert!(!splitter.needs_rotation(1 << 40));
    }

    #[test]
    fn test_next_file_path() {
        assert_eq!(next_file_path("data/out", 0), PathBuf::from("data/out_0.parquet"));
        assert_eq!(next_file_path("out", 12), PathBuf::from("out_12.parquet"));
    }

    #[test]
    fn test_empty_file_accepts_oversized_group() {
        let splitter = FileSplitter::new("out", 10);
        assert!(!splitter.needs_rotation(1_000));
    }

    #[test]
    fn test_rotation_sequence() {
        let mut splitter = FileSplitter::new("out", 1_000);
        splitter.record_bytes(4);
        splitter.record_row_group(600);
        assert!(!splitter.needs_rotation(396));
        assert!(splitter.needs_rotation(397));

        assert_eq!(splitter.rotation_reason(397), Some(RotationReason::SizeLimit));
        assert_eq!(
            splitter.rotate(RotationReason::SizeLimit),
            PathBuf::from("out_1.parquet")
        );
        assert_eq!(
            splitter.state(),
            &WriterState {
                active_file_index: 1,
                bytes_written_current_file: 0,
                output_prefix: "out".to_string(),
            }
        );
        assert_eq!(splitter.row_groups_current_file(), 0);
        assert_eq!(
            splitter.rotate(RotationReason::SizeLimit),
            PathBuf::from("out_2.parquet")
        );
    }

    #[test]
    fn test_row_group_cap_forces_rotation() {
        let mut splitter = FileSplitter::new("out", 0);
        for _ in 0..MAX_ROW_GROUPS_PER_FILE {
            splitter.record_row_group(1);
        }
        assert!(splitter.needs_rotation(1));
        assert_eq!(
            splitter.rotation_reason(1),
            Some(RotationReason::RowGroupLimit)
        );
    }

    #[test]
    fn test_row_group_cap_wins_over_size_limit() {
        let mut splitter = FileSplitter::new("out", 10);
        for _ in 0..MAX_ROW_GROUPS_PER_FILE {
            splitter.record_row_group(1);
        }
        assert_eq!(
            splitter.rotation_reason(1_000),
            Some(RotationReason::RowGroupLimit)
        );
        assert_eq!(
            RotationReason::RowGroupLimit.to_string(),
            "row group limit reached"
        );
        assert_eq!(RotationReason::SizeLimit.to_string(), "size limit reached");
    }
}
