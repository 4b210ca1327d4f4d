//! Textual rendering of values, and parsing them back.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use datahobbit_core::schema::DEFAULT_FLOAT_PRECISION;
use datahobbit_core::{FieldSpec, FieldType, Value};
use thiserror::Error;

/// Wrapper for a rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Render a value for the field it belongs to.
    ///
    /// Floats use the field's declared precision; everything else has a single
    /// fixed rendering.
    pub fn render(value: &Value, field: &FieldSpec) -> Self {
        match value {
            Value::Integer(i) => CsvValue(i.to_string()),
            Value::Float(f) => {
                let precision = field
                    .constraints
                    .float_precision()
                    .unwrap_or(DEFAULT_FLOAT_PRECISION) as usize;
                CsvValue(format!("{f:.precision$}"))
            }
            Value::String(s) => CsvValue(s.clone()),
            Value::Boolean(b) => CsvValue(if *b {
                "true".to_string()
            } else {
                "false".to_string()
            }),
            Value::Date(d) => CsvValue(d.format("%Y-%m-%d").to_string()),
            Value::Timestamp(dt) => CsvValue(dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    /// Get the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error type for parsing failures.
#[derive(Debug, Clone, Error)]
#[error("Failed to parse '{value}' as {expected_type}: {message}")]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_type: String,
}

impl CsvParseError {
    fn new(value: &str, field_type: FieldType, message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            value: value.to_string(),
            expected_type: field_type.to_string(),
        }
    }
}

/// Parse a rendered field back into a value of the field's declared type.
///
/// This is the reverse of [`CsvValue::render`].
pub fn parse_value(text: &str, field: &FieldSpec) -> Result<Value, CsvParseError> {
    let field_type = field.field_type;
    match field_type {
        FieldType::Integer => text
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| CsvParseError::new(text, field_type, e)),
        FieldType::Float => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| CsvParseError::new(text, field_type, e)),
        FieldType::Boolean => match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(CsvParseError::new(text, field_type, "expected true or false")),
        },
        FieldType::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|e| CsvParseError::new(text, field_type, e)),
        FieldType::Timestamp => DateTime::parse_from_rfc3339(text)
            .map(|dt| Value::Timestamp(dt.with_timezone(&Utc)))
            .map_err(|e| CsvParseError::new(text, field_type, e)),
        FieldType::String
        | FieldType::Uuid
        | FieldType::Name
        | FieldType::FirstName
        | FieldType::LastName
        | FieldType::Email
        | FieldType::Password
        | FieldType::Sentence
        | FieldType::PhoneNumber
        | FieldType::Word => Ok(Value::String(text.to_string())),
    }
}
