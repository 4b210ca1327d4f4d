//! Column-wise buffer for one row group.

use crate::error::EncodingError;
use crate::schema::TIMESTAMP_TZ;
use arrow::array::{
    ArrayRef, BooleanBuilder, Date32Builder, Float64Builder, Int64Builder, StringBuilder,
    TimestampMicrosecondBuilder,
};
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use chrono::Datelike;
use datahobbit_core::{ColumnKind, Record, Schema, Value};
use std::sync::Arc;

/// Days from 0001-01-01 (CE) to 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

enum ColumnBuilder {
    Int64(Int64Builder),
    Float64(Float64Builder),
    Utf8(StringBuilder),
    Boolean(BooleanBuilder),
    Date(Date32Builder),
    Timestamp(TimestampMicrosecondBuilder),
}

impl ColumnBuilder {
    fn new(kind: ColumnKind, capacity: usize) -> Self {
        match kind {
            ColumnKind::Int64 => Self::Int64(Int64Builder::with_capacity(capacity)),
            ColumnKind::Float64 => Self::Float64(Float64Builder::with_capacity(capacity)),
            ColumnKind::Utf8 => Self::Utf8(StringBuilder::with_capacity(capacity, capacity * 16)),
            ColumnKind::Boolean => Self::Boolean(BooleanBuilder::with_capacity(capacity)),
            ColumnKind::Date => Self::Date(Date32Builder::with_capacity(capacity)),
            ColumnKind::Timestamp => {
                Self::Timestamp(TimestampMicrosecondBuilder::with_capacity(capacity))
            }
        }
    }

    /// Append a value already known to have this column's kind.
    fn append(&mut self, value: &Value) {
        match (self, value) {
            (Self::Int64(b), Value::Integer(v)) => b.append_value(*v),
            (Self::Float64(b), Value::Float(v)) => b.append_value(*v),
            (Self::Utf8(b), Value::String(v)) => b.append_value(v),
            (Self::Boolean(b), Value::Boolean(v)) => b.append_value(*v),
            (Self::Date(b), Value::Date(v)) => {
                b.append_value(v.num_days_from_ce() - EPOCH_DAYS_FROM_CE)
            }
            (Self::Timestamp(b), Value::Timestamp(v)) => b.append_value(v.timestamp_micros()),
            // Kinds are checked in RowGroup::push before any column is touched.
            _ => {}
        }
    }

    fn finish(&mut self) -> ArrayRef {
        match self {
            Self::Int64(b) => Arc::new(b.finish()),
            Self::Float64(b) => Arc::new(b.finish()),
            Self::Utf8(b) => Arc::new(b.finish()),
            Self::Boolean(b) => Arc::new(b.finish()),
            Self::Date(b) => Arc::new(b.finish()),
            Self::Timestamp(b) => Arc::new(b.finish().with_timezone(TIMESTAMP_TZ)),
        }
    }
}

/// A bounded batch of records held column-wise until it is encoded.
pub struct RowGroup {
    arrow_schema: SchemaRef,
    names: Vec<String>,
    kinds: Vec<ColumnKind>,
    columns: Vec<ColumnBuilder>,
    capacity: usize,
    rows: usize,
}

impl RowGroup {
    /// Create an empty row group holding up to `capacity` rows.
    pub fn new(schema: &Schema, arrow_schema: SchemaRef, capacity: usize) -> Self {
        let kinds: Vec<ColumnKind> = schema.fields().iter().map(|f| f.column_kind()).collect();
        let columns = kinds
            .iter()
            .map(|kind| ColumnBuilder::new(*kind, capacity))
            .collect();

        Self {
            arrow_schema,
            names: schema.fields().iter().map(|f| f.name.clone()).collect(),
            kinds,
            columns,
            capacity,
            rows: 0,
        }
    }

    /// Append one record.
    ///
    /// The record is checked against every column first, so a failed push
    /// leaves the group unchanged.
    pub fn push(&mut self, record: &Record) -> Result<(), EncodingError> {
        if record.len() != self.kinds.len() {
            return Err(EncodingError::FieldCount {
                index: record.index,
                expected: self.kinds.len(),
                actual: record.len(),
            });
        }

        for ((value, kind), name) in record.values.iter().zip(&self.kinds).zip(&self.names) {
            if value.column_kind() != *kind {
                return Err(EncodingError::TypeMismatch {
                    index: record.index,
                    column: name.clone(),
                    expected: *kind,
                    actual: value.column_kind(),
                });
            }
        }

        for (column, value) in self.columns.iter_mut().zip(&record.values) {
            column.append(value);
        }
        self.rows += 1;
        Ok(())
    }

    /// Number of buffered rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether the group has reached its row target.
    pub fn is_full(&self) -> bool {
        self.rows >= self.capacity
    }

    /// Drain the buffered rows into a record batch, leaving the group empty.
    pub fn finish(&mut self) -> Result<RecordBatch, ArrowError> {
        let arrays: Vec<ArrayRef> = self.columns.iter_mut().map(ColumnBuilder::finish).collect();
        self.rows = 0;
        RecordBatch::try_new(Arc::clone(&self.arrow_schema), arrays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::arrow_schema;
    use arrow::array::{Array, Date32Array, Int64Array, StringArray};
    use chrono::NaiveDate;

    fn test_schema() -> Schema {
        Schema::parse(
            r#"{"columns": [
                {"name": "id", "type": "integer"},
                {"name": "name", "type": "string"},
                {"name": "born", "type": "date"}
            ]}"#,
        )
        .unwrap()
    }

    fn record(index: u64, id: i64, name: &str, born: NaiveDate) -> Record {
        Record::new(
            index,
            vec![
                Value::Integer(id),
                Value::String(name.to_string()),
                Value::Date(born),
            ],
        )
    }

    #[test]
    fn test_push_and_finish() {
        let schema = test_schema();
        let mut group = RowGroup::new(&schema, arrow_schema(&schema), 2);
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();

        group.push(&record(0, 7, "ada", epoch)).unwrap();
        assert!(!group.is_full());
        group.push(&record(1, 8, "bob", epoch)).unwrap();
        assert!(group.is_full());

        let batch = group.finish().unwrap();
        assert!(group.is_empty());
        assert_eq!(batch.num_rows(), 2);

        let ids = batch.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(ids.value(1), 8);
        let names = batch.column(1).as_any().downcast_ref::<StringArray>().unwrap();
        assert_eq!(names.value(0), "ada");
        let days = batch.column(2).as_any().downcast_ref::<Date32Array>().unwrap();
        assert_eq!(days.value(0), 1);
    }

    #[test]
    fn test_type_mismatch_leaves_group_unchanged() {
        let schema = test_schema();
        let mut group = RowGroup::new(&schema, arrow_schema(&schema), 10);

        let bad = Record::new(
            3,
            vec![
                Value::Integer(1),
                Value::Boolean(true),
                Value::Date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
            ],
        );
        let err = group.push(&bad).unwrap_err();

        assert_eq!(
            err,
            EncodingError::TypeMismatch {
                index: 3,
                column: "name".to_string(),
                expected: ColumnKind::Utf8,
                actual: ColumnKind::Boolean,
            }
        );
        assert!(group.is_empty());

        let batch = group.finish().unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.column(0).len(), 0);
    }

    #[test]
    fn test_field_count_mismatch() {
        let schema = test_schema();
        let mut group = RowGroup::new(&schema, arrow_schema(&schema), 10);

        let err = group
            .push(&Record::new(0, vec![Value::Integer(1)]))
            .unwrap_err();
        assert!(matches!(
            err,
            EncodingError::FieldCount {
                expected: 3,
                actual: 1,
                ..
            }
        ));
    }
}
