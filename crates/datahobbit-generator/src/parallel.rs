//! Parallel record synthesis on the rayon pool.
//!
//! Records are synthesised a chunk at a time: the indices of a chunk are
//! partitioned across worker threads, each record drawing from its own
//! sub-stream of the [`RandomSource`]. The chunk is then handed out in index
//! order, so a single writer downstream sees the same sequence as it would
//! from [`RecordStream`](crate::RecordStream).

use crate::generator::synthesize_record;
use crate::random::RandomSource;
use datahobbit_core::{Record, Schema};
use rayon::prelude::*;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::trace;

/// Number of records synthesised per parallel chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Iterator yielding records in index order, synthesised in parallel chunks.
///
/// Memory stays bounded by one chunk regardless of the total count.
pub struct ParallelRecordStream<'a> {
    schema: &'a Schema,
    source: RandomSource,
    /// Index of the first record not yet synthesised
    next_index: u64,
    /// One past the last index to yield
    end: u64,
    chunk_size: usize,
    buffer: VecDeque<Record>,
}

impl<'a> ParallelRecordStream<'a> {
    /// Create a parallel stream of `count` records starting at index 0.
    pub fn new(schema: &'a Schema, count: u64, source: RandomSource) -> Self {
        Self {
            schema,
            source,
            next_index: 0,
            end: count,
            chunk_size: DEFAULT_CHUNK_SIZE,
            buffer: VecDeque::new(),
        }
    }

    /// Override the number of records per chunk (at least 1).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Number of records still to be yielded.
    pub fn remaining(&self) -> u64 {
        (self.end - self.next_index) + self.buffer.len() as u64
    }

    fn fill_buffer(&mut self) {
        let len = (self.end - self.next_index).min(self.chunk_size as u64);
        if len == 0 {
            return;
        }

        let start = self.next_index;
        let schema = self.schema;
        let source = self.source;

        // collect() on an indexed parallel iterator preserves index order.
        let chunk: Vec<Record> = (0..len)
            .into_par_iter()
            .map(|offset| synthesize_record(schema, &source, start + offset))
            .collect();

        trace!(start, len, "Synthesised record chunk");

        self.next_index += len;
        self.buffer.extend(chunk);
    }
}

impl Iterator for ParallelRecordStream<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() {
            self.fill_buffer();
        }
        self.buffer.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ParallelRecordStream<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::produce;

    fn test_schema() -> Schema {
        Schema::parse(
            r#"{"columns": [
                {"name": "id", "type": "integer"},
                {"name": "name", "type": "string"},
                {"name": "score", "type": "float"},
                {"name": "email", "type": "email"},
                {"name": "seen", "type": "timestamp"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_matches_sequential_stream() {
        let schema = test_schema();

        let sequential: Vec<_> = produce(&schema, 257, RandomSource::new(42)).collect();
        let parallel: Vec<_> = ParallelRecordStream::new(&schema, 257, RandomSource::new(42))
            .with_chunk_size(16)
            .collect();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_index_order_across_chunks() {
        let schema = test_schema();
        let records: Vec<_> = ParallelRecordStream::new(&schema, 100, RandomSource::default())
            .with_chunk_size(7)
            .collect();

        assert_eq!(records.len(), 100);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.index, i as u64);
        }
    }

    #[test]
    fn test_remaining_and_empty() {
        let schema = test_schema();

        let mut stream =
            ParallelRecordStream::new(&schema, 5, RandomSource::default()).with_chunk_size(2);
        assert_eq!(stream.remaining(), 5);
        stream.next();
        assert_eq!(stream.remaining(), 4);

        let mut empty = ParallelRecordStream::new(&schema, 0, RandomSource::default());
        assert!(empty.next().is_none());
    }
}
