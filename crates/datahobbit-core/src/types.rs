//! Field types understood by the generator.
//!
//! `FieldType` is the logical type named in the schema document. Every logical
//! type maps onto exactly one physical [`ColumnKind`], which is what the
//! writers encode.

use std::fmt;
use std::str::FromStr;

/// Logical field type as written in the schema document.
///
/// # Document Format
///
/// Types are plain strings:
/// ```json
/// {"name": "id", "type": "integer"}
/// {"name": "contact", "type": "email"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 64-bit signed integer
    Integer,
    /// 64-bit IEEE 754 floating point
    Float,
    /// Random alphanumeric text, a pick from a list, or a pattern
    String,
    /// Boolean value
    Boolean,
    /// Calendar date (YYYY-MM-DD)
    Date,
    /// UTC timestamp with second resolution
    Timestamp,
    /// UUID v4 rendered as text
    Uuid,

    // Realistic fake text
    /// Full person name
    Name,
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Safe e-mail address
    Email,
    /// Password of configurable length
    Password,
    /// Lorem ipsum sentence
    Sentence,
    /// Phone number
    PhoneNumber,
    /// Single lorem ipsum word
    Word,
}

/// Physical column type a field is encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// 64-bit integer column
    Int64,
    /// 64-bit float column
    Float64,
    /// Variable-length UTF-8 byte column
    Utf8,
    /// Bit-packed boolean column
    Boolean,
    /// Days since the Unix epoch, 32-bit
    Date,
    /// Microseconds since the Unix epoch, UTC
    Timestamp,
}

impl FieldType {
    /// All supported types, in documentation order.
    pub const ALL: [FieldType; 15] = [
        FieldType::Integer,
        FieldType::Float,
        FieldType::String,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Timestamp,
        FieldType::Uuid,
        FieldType::Name,
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::Email,
        FieldType::Password,
        FieldType::Sentence,
        FieldType::PhoneNumber,
        FieldType::Word,
    ];

    /// The name used for this type in schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Name => "name",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Sentence => "sentence",
            Self::PhoneNumber => "phone_number",
            Self::Word => "word",
        }
    }

    /// The physical column this type is stored in.
    pub fn column_kind(&self) -> ColumnKind {
        match self {
            Self::Integer => ColumnKind::Int64,
            Self::Float => ColumnKind::Float64,
            Self::Boolean => ColumnKind::Boolean,
            Self::Date => ColumnKind::Date,
            Self::Timestamp => ColumnKind::Timestamp,
            Self::String
            | Self::Uuid
            | Self::Name
            | Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::Password
            | Self::Sentence
            | Self::PhoneNumber
            | Self::Word => ColumnKind::Utf8,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported data type: {0}")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Utf8 => "utf8",
            Self::Boolean => "boolean",
            Self::Date => "date32",
            Self::Timestamp => "timestamp(us, UTC)",
        };
        f.write_str(name)
    }
}
