//! Mapping from the datahobbit schema to an Arrow schema.

use arrow::datatypes::{DataType, Field, Schema as ArrowSchema, SchemaRef, TimeUnit};
use datahobbit_core::{ColumnKind, Schema};
use std::sync::Arc;

/// Time zone attached to every timestamp column.
pub const TIMESTAMP_TZ: &str = "UTC";

/// Arrow data type used to store a column kind.
pub fn data_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Int64 => DataType::Int64,
        ColumnKind::Float64 => DataType::Float64,
        ColumnKind::Utf8 => DataType::Utf8,
        ColumnKind::Boolean => DataType::Boolean,
        ColumnKind::Date => DataType::Date32,
        ColumnKind::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, Some(TIMESTAMP_TZ.into())),
    }
}

/// Build the Arrow schema, one non-nullable column per field in order.
pub fn arrow_schema(schema: &Schema) -> SchemaRef {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| Field::new(&field.name, data_type(field.column_kind()), false))
        .collect();

    Arc::new(ArrowSchema::new(fields))
}
