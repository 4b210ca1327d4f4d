//! Record stream: drives the value generators across a schema for N records.

use crate::generators::generate_value;
use crate::random::RandomSource;
use datahobbit_core::{Record, Schema};
use std::iter::FusedIterator;

/// Synthesise the record at `index`.
///
/// The record draws only from its own sub-stream of `source`, so the result
/// does not depend on which records were produced before it.
pub fn synthesize_record(schema: &Schema, source: &RandomSource, index: u64) -> Record {
    let mut rng = source.rng_for_index(index);
    let values = schema
        .fields()
        .iter()
        .map(|field| generate_value(field, &mut rng, index))
        .collect();
    Record::new(index, values)
}

/// Lazily produce exactly `count` records, starting at index 0.
pub fn produce(schema: &Schema, count: u64, source: RandomSource) -> RecordStream<'_> {
    RecordStream::new(schema, count, source)
}

/// Iterator that lazily generates records in index order.
///
/// Only the record being yielded is ever held in memory. The stream cannot be
/// rewound; restarting means building a new stream from the same source.
pub struct RecordStream<'a> {
    schema: &'a Schema,
    source: RandomSource,
    /// Index of the next record to yield
    index: u64,
    /// One past the last index to yield
    end: u64,
}

impl<'a> RecordStream<'a> {
    /// Create a stream of `count` records starting at index 0.
    pub fn new(schema: &'a Schema, count: u64, source: RandomSource) -> Self {
        Self {
            schema,
            source,
            index: 0,
            end: count,
        }
    }

    /// Start the stream at `index`, keeping the same number of records.
    ///
    /// This is useful for resuming generation mid-range: record `index` is
    /// identical to the one a stream from 0 would yield at that position.
    pub fn with_start_index(mut self, index: u64) -> Self {
        let count = self.end - self.index;
        self.index = index;
        self.end = index.saturating_add(count);
        self
    }

    /// Get the index of the next record.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Number of records still to be yielded.
    pub fn remaining(&self) -> u64 {
        self.end - self.index
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        self.schema
    }
}

impl Iterator for RecordStream<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }

        let record = synthesize_record(self.schema, &self.source, self.index);
        self.index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RecordStream<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use datahobbit_core::Value;

    fn test_schema() -> Schema {
        let json = r#"
{
  "columns": [
    {"name": "id", "type": "integer", "constraints": {"sequence_start": 1}},
    {"name": "email", "type": "string", "constraints": {"pattern": "user_{index}@example.com"}},
    {"name": "age", "type": "integer", "constraints": {"min": 18, "max": 80}},
    {"name": "is_active", "type": "boolean", "constraints": {"true_weight": 0.8}},
    {"name": "joined", "type": "date"}
  ]
}
"#;
        Schema::parse(json).unwrap()
    }

    #[test]
    fn test_generate_single_record() {
        let schema = test_schema();
        let record = synthesize_record(&schema, &RandomSource::new(42), 0);

        assert_eq!(record.index, 0);
        assert_eq!(record.len(), schema.len());
        assert_eq!(record.get(0), Some(&Value::Integer(1)));
        assert_eq!(
            record.get(1),
            Some(&Value::String("user_0@example.com".to_string()))
        );

        let age = record.get(2).and_then(Value::as_i64).unwrap();
        assert!((18..=80).contains(&age));
    }

    #[test]
    fn test_values_match_field_kinds() {
        let schema = test_schema();

        for record in produce(&schema, 50, RandomSource::new(3)) {
            assert_eq!(record.len(), schema.len());
            for (value, field) in record.values.iter().zip(schema.fields()) {
                assert_eq!(value.column_kind(), field.column_kind());
            }
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let schema = test_schema();

        let run1: Vec<_> = produce(&schema, 20, RandomSource::new(42)).collect();
        let run2: Vec<_> = produce(&schema, 20, RandomSource::new(42)).collect();
        let other: Vec<_> = produce(&schema, 20, RandomSource::new(43)).collect();

        assert_eq!(run1, run2);
        assert_ne!(run1, other);
    }

    #[test]
    fn test_produce_exact_count() {
        let schema = test_schema();
        let records: Vec<_> = produce(&schema, 10, RandomSource::default()).collect();

        assert_eq!(records.len(), 10);

        // Verify indices are sequential
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.index, i as u64);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let schema = test_schema();
        let mut stream = produce(&schema, 0, RandomSource::default());

        assert_eq!(stream.size_hint(), (0, Some(0)));
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_with_start_index() {
        let schema = test_schema();

        let full: Vec<_> = produce(&schema, 10, RandomSource::new(42)).collect();
        let tail: Vec<_> = RecordStream::new(&schema, 5, RandomSource::new(42))
            .with_start_index(5)
            .collect();

        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].index, 5);
        assert_eq!(&full[5..], &tail[..]);
    }

    #[test]
    fn test_current_index() {
        let schema = test_schema();
        let mut stream = produce(&schema, 3, RandomSource::default());

        assert_eq!(stream.current_index(), 0);
        assert_eq!(stream.remaining(), 3);
        stream.next();
        assert_eq!(stream.current_index(), 1);
        stream.next();
        assert_eq!(stream.current_index(), 2);
        assert_eq!(stream.remaining(), 1);
    }
}
