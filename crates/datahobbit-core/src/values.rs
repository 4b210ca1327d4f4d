//! Value representations for generated records.
//!
//! A [`Record`] is an ephemeral, ordered list of [`Value`]s, one per schema
//! field. Records are produced on demand by the generator and consumed
//! immediately by a writer.

use crate::types::ColumnKind;
use chrono::{DateTime, NaiveDate, Utc};

/// A single synthesised value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Float(f64),

    /// UTF-8 text
    String(String),

    /// Boolean value
    Boolean(bool),

    /// Calendar date
    Date(NaiveDate),

    /// UTC timestamp
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// The physical column kind this value belongs in.
    pub fn column_kind(&self) -> ColumnKind {
        match self {
            Self::Integer(_) => ColumnKind::Int64,
            Self::Float(_) => ColumnKind::Float64,
            Self::String(_) => ColumnKind::Utf8,
            Self::Boolean(_) => ColumnKind::Boolean,
            Self::Date(_) => ColumnKind::Date,
            Self::Timestamp(_) => ColumnKind::Timestamp,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

/// One generated row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Logical record index (0-based position in the run)
    pub index: u64,

    /// One value per schema field, in column order
    pub values: Vec<Value>,
}

impl Record {
    /// Create a new record.
    pub fn new(index: u64, values: Vec<Value>) -> Self {
        Self { index, values }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a column position.
    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }

    /// Consume the record, yielding its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
