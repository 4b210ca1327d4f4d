//! Schema definitions for the datahobbit generator.
//!
//! A schema document is an ordered list of columns, each with a name, a type
//! and optional type-specific constraints:
//!
//! ```json
//! {
//!   "columns": [
//!     {"name": "id", "type": "integer", "constraints": {"sequence_start": 1}},
//!     {"name": "score", "type": "float", "constraints": {"min": 0, "max": 100, "precision": 2}}
//!   ]
//! }
//! ```
//!
//! Parsing is pure: it validates names, types and constraints and resolves
//! every default, so the resulting [`FieldSpec`]s always carry concrete bounds.
//! Generation driven by a parsed [`Schema`] therefore never fails.

use crate::types::{ColumnKind, FieldType, UnknownFieldType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Defaults
// ============================================================================

/// Default inclusive integer range.
pub const DEFAULT_INT_MIN: i64 = 0;
pub const DEFAULT_INT_MAX: i64 = 999;

/// Default half-open float range.
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;
pub const DEFAULT_FLOAT_MAX: f64 = 1000.0;

/// Decimal places used when rendering floats as text.
pub const DEFAULT_FLOAT_PRECISION: u8 = 6;
pub const MAX_FLOAT_PRECISION: u8 = 17;

/// Default inclusive string / password length range (in characters).
pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 16;
pub const MAX_STRING_LENGTH: usize = 1 << 20;

pub const DEFAULT_TRUE_WEIGHT: f64 = 0.5;

/// Default inclusive word-count range for sentences.
pub const DEFAULT_MIN_WORDS: usize = 5;
pub const DEFAULT_MAX_WORDS: usize = 10;
pub const MAX_WORDS: usize = 1 << 16;

/// Most digits a `{rand:N}` pattern placeholder may ask for.
pub const MAX_RAND_DIGITS: usize = 18;

/// Default date window.
///
/// Anchored on fixed dates rather than "now" so that identically seeded runs
/// stay byte-identical regardless of the day they run on.
pub const DEFAULT_DATE_START: &str = "2015-01-01";
pub const DEFAULT_DATE_END: &str = "2024-12-31";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse schema JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse schema YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Schema declares no columns
    #[error("Schema must declare at least one column")]
    Empty,

    /// Column without a name
    #[error("Column #{position} is missing a name")]
    MissingName { position: usize },

    /// Column with an empty name
    #[error("Column #{position} has an empty name")]
    EmptyName { position: usize },

    /// Column without a type
    #[error("Column '{field}' is missing a type")]
    MissingType { field: String },

    /// Type name not recognised
    #[error("Column '{field}': {source}")]
    UnknownType {
        field: String,
        #[source]
        source: UnknownFieldType,
    },

    /// Two columns with the same name
    #[error("Duplicate column name: {0}")]
    DuplicateField(String),

    /// Constraints malformed or out of range
    #[error("Column '{field}' has invalid constraints: {reason}")]
    InvalidConstraints { field: String, reason: String },
}

impl SchemaError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConstraints {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Normalised, validated generation bounds for a single field.
///
/// Every variant carries concrete values; defaults are resolved at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraints {
    /// Uniform integer in `[min, max]`
    IntRange { min: i64, max: i64 },

    /// `start + record index`
    ///
    /// The last value must fit in an `i64`; see [`Schema::check_sequences`].
    Sequence { start: i64 },

    /// Uniform float in `[min, max)`, rendered with `precision` decimals
    FloatRange { min: f64, max: f64, precision: u8 },

    /// Random alphanumeric text (or password) with a length in `[min, max]`
    Length { min: usize, max: usize },

    /// Uniform pick from a fixed list
    OneOf { values: Vec<String> },

    /// Pattern with `{index}`, `{rand:N}` and `{uuid}` placeholders
    Pattern { pattern: String },

    /// Boolean that is `true` with the given probability
    TrueWeight { true_weight: f64 },

    /// Uniform date in `[start, end]`
    DateRange { start: NaiveDate, end: NaiveDate },

    /// Uniform timestamp in `[start, end]`, both on whole seconds
    TimestampRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Sentence with a word count in `[min, max]`
    WordCount { min: usize, max: usize },

    /// The type takes no constraints
    None,
}

impl Constraints {
    /// Defaults for a type when the document declares no constraints.
    pub fn default_for(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Integer => Self::IntRange {
                min: DEFAULT_INT_MIN,
                max: DEFAULT_INT_MAX,
            },
            FieldType::Float => Self::FloatRange {
                min: DEFAULT_FLOAT_MIN,
                max: DEFAULT_FLOAT_MAX,
                precision: DEFAULT_FLOAT_PRECISION,
            },
            FieldType::String | FieldType::Password => Self::Length {
                min: DEFAULT_MIN_LENGTH,
                max: DEFAULT_MAX_LENGTH,
            },
            FieldType::Boolean => Self::TrueWeight {
                true_weight: DEFAULT_TRUE_WEIGHT,
            },
            FieldType::Date => {
                let (start, end) = default_date_window();
                Self::DateRange { start, end }
            }
            FieldType::Timestamp => {
                let (start, end) = default_date_window();
                Self::TimestampRange {
                    start: start_of_day(start),
                    end: end_of_day(end),
                }
            }
            FieldType::Sentence => Self::WordCount {
                min: DEFAULT_MIN_WORDS,
                max: DEFAULT_MAX_WORDS,
            },
            FieldType::Uuid
            | FieldType::Name
            | FieldType::FirstName
            | FieldType::LastName
            | FieldType::Email
            | FieldType::PhoneNumber
            | FieldType::Word => Self::None,
        }
    }

    /// Decimal places for text rendering (floats only).
    pub fn float_precision(&self) -> Option<u8> {
        match self {
            Self::FloatRange { precision, .. } => Some(*precision),
            _ => None,
        }
    }
}

fn default_date_window() -> (NaiveDate, NaiveDate) {
    let start = parse_date(DEFAULT_DATE_START).unwrap_or(NaiveDate::MIN);
    let end = parse_date(DEFAULT_DATE_END).unwrap_or(start);
    (start, end)
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(23, 59, 59)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| start_of_day(date))
}

/// Round up to the next whole second; `None` past the end of the calendar.
fn ceil_to_second(ts: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if ts.timestamp_subsec_nanos() == 0 {
        return Some(ts);
    }
    DateTime::from_timestamp(ts.timestamp().checked_add(1)?, 0)
}

fn floor_to_second(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.timestamp(), 0).unwrap_or(ts)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a timestamp given as RFC 3339 or as a bare `YYYY-MM-DD` date.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    parse_date(s).map(start_of_day)
}

// ============================================================================
// Raw document types
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(alias = "fields")]
    columns: Vec<RawField>,

    #[serde(default)]
    header: bool,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: Option<String>,

    #[serde(rename = "type")]
    field_type: Option<String>,

    #[serde(default)]
    constraints: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct IntegerConstraints {
    min: Option<i64>,
    max: Option<i64>,
    sequence_start: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FloatConstraints {
    min: Option<f64>,
    max: Option<f64>,
    precision: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StringConstraints {
    min_length: Option<usize>,
    max_length: Option<usize>,
    values: Option<Vec<String>>,
    pattern: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LengthConstraints {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BooleanConstraints {
    true_weight: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeConstraints {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct WordConstraints {
    min_words: Option<usize>,
    max_words: Option<usize>,
}

fn decode<T: DeserializeOwned + Default>(
    field: &str,
    raw: Option<serde_json::Value>,
) -> Result<T, SchemaError> {
    match raw {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value).map_err(|e| SchemaError::invalid(field, e.to_string()))
        }
    }
}

fn resolve_length(
    field: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<Constraints, SchemaError> {
    let min = min.unwrap_or(DEFAULT_MIN_LENGTH.min(max.unwrap_or(DEFAULT_MIN_LENGTH)));
    let max = max.unwrap_or(DEFAULT_MAX_LENGTH.max(min));
    if min > max {
        return Err(SchemaError::invalid(
            field,
            format!("min_length {min} is greater than max_length {max}"),
        ));
    }
    if max > MAX_STRING_LENGTH {
        return Err(SchemaError::invalid(
            field,
            format!("max_length {max} exceeds the limit of {MAX_STRING_LENGTH}"),
        ));
    }
    Ok(Constraints::Length { min, max })
}

/// Check every `{rand:N}` placeholder of a pattern.
fn validate_pattern(field: &str, pattern: &str) -> Result<(), SchemaError> {
    let mut rest = pattern;
    while let Some(offset) = rest.find("{rand:") {
        let after = &rest[offset + "{rand:".len()..];
        let Some(close) = after.find('}') else {
            return Err(SchemaError::invalid(
                field,
                "pattern has an unterminated {rand:N} placeholder",
            ));
        };
        let digits = &after[..close];
        match digits.parse::<usize>() {
            Ok(n) if (1..=MAX_RAND_DIGITS).contains(&n) => {}
            _ => {
                return Err(SchemaError::invalid(
                    field,
                    format!("{{rand:{digits}}} must ask for 1 to {MAX_RAND_DIGITS} digits"),
                ))
            }
        }
        rest = &after[close + 1..];
    }
    Ok(())
}

/// Resolve the raw constraint object for a field into normalised [`Constraints`].
fn resolve_constraints(
    field: &str,
    field_type: FieldType,
    raw: Option<serde_json::Value>,
) -> Result<Constraints, SchemaError> {
    match field_type {
        FieldType::Integer => {
            let c: IntegerConstraints = decode(field, raw)?;
            if let Some(start) = c.sequence_start {
                if c.min.is_some() || c.max.is_some() {
                    return Err(SchemaError::invalid(
                        field,
                        "sequence_start cannot be combined with min/max",
                    ));
                }
                return Ok(Constraints::Sequence { start });
            }
            let min = c.min.unwrap_or(DEFAULT_INT_MIN.min(c.max.unwrap_or(DEFAULT_INT_MIN)));
            let max = c.max.unwrap_or(DEFAULT_INT_MAX.max(min));
            if min > max {
                return Err(SchemaError::invalid(
                    field,
                    format!("min {min} is greater than max {max}"),
                ));
            }
            Ok(Constraints::IntRange { min, max })
        }

        FieldType::Float => {
            let c: FloatConstraints = decode(field, raw)?;
            let min = c
                .min
                .unwrap_or(DEFAULT_FLOAT_MIN.min(c.max.unwrap_or(DEFAULT_FLOAT_MIN)));
            let max = c.max.unwrap_or(DEFAULT_FLOAT_MAX.max(min));
            if !min.is_finite() || !max.is_finite() {
                return Err(SchemaError::invalid(field, "bounds must be finite"));
            }
            if min > max {
                return Err(SchemaError::invalid(
                    field,
                    format!("min {min} is greater than max {max}"),
                ));
            }
            if !(max - min).is_finite() {
                return Err(SchemaError::invalid(field, "range span overflows"));
            }
            let precision = c.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            if precision > MAX_FLOAT_PRECISION {
                return Err(SchemaError::invalid(
                    field,
                    format!("precision {precision} exceeds {MAX_FLOAT_PRECISION}"),
                ));
            }
            Ok(Constraints::FloatRange {
                min,
                max,
                precision,
            })
        }

        FieldType::String => {
            let c: StringConstraints = decode(field, raw)?;
            let has_length = c.min_length.is_some() || c.max_length.is_some();
            match (c.values, c.pattern) {
                (Some(_), Some(_)) => Err(SchemaError::invalid(
                    field,
                    "values and pattern are mutually exclusive",
                )),
                (Some(_), None) | (None, Some(_)) if has_length => Err(SchemaError::invalid(
                    field,
                    "length bounds cannot be combined with values or pattern",
                )),
                (Some(values), None) => {
                    if values.is_empty() {
                        return Err(SchemaError::invalid(field, "values must not be empty"));
                    }
                    Ok(Constraints::OneOf { values })
                }
                (None, Some(pattern)) => {
                    if pattern.is_empty() {
                        return Err(SchemaError::invalid(field, "pattern must not be empty"));
                    }
                    validate_pattern(field, &pattern)?;
                    Ok(Constraints::Pattern { pattern })
                }
                (None, None) => resolve_length(field, c.min_length, c.max_length),
            }
        }

        FieldType::Password => {
            let c: LengthConstraints = decode(field, raw)?;
            let resolved = resolve_length(field, c.min_length, c.max_length)?;
            if matches!(resolved, Constraints::Length { min: 0, .. }) {
                return Err(SchemaError::invalid(field, "min_length must be at least 1"));
            }
            Ok(resolved)
        }

        FieldType::Boolean => {
            let c: BooleanConstraints = decode(field, raw)?;
            let true_weight = c.true_weight.unwrap_or(DEFAULT_TRUE_WEIGHT);
            if !(0.0..=1.0).contains(&true_weight) {
                return Err(SchemaError::invalid(
                    field,
                    format!("true_weight {true_weight} is outside [0, 1]"),
                ));
            }
            Ok(Constraints::TrueWeight { true_weight })
        }

        FieldType::Date => {
            let c: RangeConstraints = decode(field, raw)?;
            let (default_start, default_end) = default_date_window();
            let start = c
                .start
                .as_deref()
                .map(|s| {
                    parse_date(s).ok_or_else(|| {
                        SchemaError::invalid(field, format!("invalid start date '{s}'"))
                    })
                })
                .transpose()?;
            let end = c
                .end
                .as_deref()
                .map(|s| {
                    parse_date(s)
                        .ok_or_else(|| SchemaError::invalid(field, format!("invalid end date '{s}'")))
                })
                .transpose()?;
            let start = start.unwrap_or_else(|| end.map_or(default_start, |e| default_start.min(e)));
            let end = end.unwrap_or_else(|| default_end.max(start));
            if start > end {
                return Err(SchemaError::invalid(
                    field,
                    format!("start {start} is after end {end}"),
                ));
            }
            Ok(Constraints::DateRange { start, end })
        }

        FieldType::Timestamp => {
            let c: RangeConstraints = decode(field, raw)?;
            let (default_start, default_end) = default_date_window();
            let start = c
                .start
                .as_deref()
                .map(|s| {
                    parse_timestamp(s)
                        .and_then(ceil_to_second)
                        .ok_or_else(|| {
                            SchemaError::invalid(field, format!("invalid start timestamp '{s}'"))
                        })
                })
                .transpose()?;
            let end = c
                .end
                .as_deref()
                .map(|s| {
                    parse_timestamp(s).map(floor_to_second).ok_or_else(|| {
                        SchemaError::invalid(field, format!("invalid end timestamp '{s}'"))
                    })
                })
                .transpose()?;
            let default_start = start_of_day(default_start);
            let start = start.unwrap_or_else(|| end.map_or(default_start, |e| default_start.min(e)));
            let end = end.unwrap_or_else(|| end_of_day(default_end).max(start));
            // Both bounds sit on whole seconds; a sub-second window is empty.
            if start > end {
                return Err(SchemaError::invalid(
                    field,
                    format!("start {} is after end {}", start.to_rfc3339(), end.to_rfc3339()),
                ));
            }
            Ok(Constraints::TimestampRange { start, end })
        }

        FieldType::Sentence => {
            let c: WordConstraints = decode(field, raw)?;
            let min = c
                .min_words
                .unwrap_or(DEFAULT_MIN_WORDS.min(c.max_words.unwrap_or(DEFAULT_MIN_WORDS)));
            let max = c.max_words.unwrap_or(DEFAULT_MAX_WORDS.max(min));
            if min == 0 {
                return Err(SchemaError::invalid(field, "min_words must be at least 1"));
            }
            if min > max {
                return Err(SchemaError::invalid(
                    field,
                    format!("min_words {min} is greater than max_words {max}"),
                ));
            }
            if max > MAX_WORDS {
                return Err(SchemaError::invalid(
                    field,
                    format!("max_words {max} exceeds the limit of {MAX_WORDS}"),
                ));
            }
            Ok(Constraints::WordCount { min, max })
        }

        FieldType::Uuid
        | FieldType::Name
        | FieldType::FirstName
        | FieldType::LastName
        | FieldType::Email
        | FieldType::PhoneNumber
        | FieldType::Word => match raw {
            None | Some(serde_json::Value::Null) => Ok(Constraints::None),
            Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(Constraints::None),
            Some(_) => Err(SchemaError::invalid(
                field,
                format!("type '{field_type}' takes no constraints"),
            )),
        },
    }
}

// ============================================================================
// Schema Types
// ============================================================================

/// A single, validated column of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Column name (unique, non-empty)
    pub name: String,

    /// Logical type
    pub field_type: FieldType,

    /// Normalised generation bounds
    pub constraints: Constraints,
}

impl FieldSpec {
    /// Create a field with the default constraints for its type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            constraints: Constraints::default_for(field_type),
        }
    }

    /// Create a field from a raw JSON constraint object, validating it.
    pub fn with_raw_constraints(
        name: impl Into<String>,
        field_type: FieldType,
        constraints: serde_json::Value,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let constraints = resolve_constraints(&name, field_type, Some(constraints))?;
        Ok(Self {
            name,
            field_type,
            constraints,
        })
    }

    /// The physical column this field is encoded as.
    pub fn column_kind(&self) -> ColumnKind {
        self.field_type.column_kind()
    }
}

/// Ordered, validated list of fields.
///
/// Field order defines column order in every output. A schema always has at
/// least one field and all names are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    header: bool,
}

impl Schema {
    /// Build a schema from already constructed fields.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName { position });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        Ok(Self {
            fields,
            header: false,
        })
    }

    /// Request a header row in delimited output.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Load a schema from a file.
    ///
    /// Files ending in `.yaml` / `.yml` are read as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::parse(&content),
        }
    }

    /// Parse a schema from a JSON document.
    pub fn parse(document: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_json::from_str(document)?;
        Self::from_raw(raw)
    }

    /// Parse a schema from a YAML document with the same shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSchema) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(raw.columns.len());

        for (position, column) in raw.columns.into_iter().enumerate() {
            let name = column.name.ok_or(SchemaError::MissingName { position })?;
            if name.is_empty() {
                return Err(SchemaError::EmptyName { position });
            }
            let type_name = column
                .field_type
                .ok_or_else(|| SchemaError::MissingType {
                    field: name.clone(),
                })?;
            let field_type: FieldType =
                type_name
                    .parse()
                    .map_err(|source| SchemaError::UnknownType {
                        field: name.clone(),
                        source,
                    })?;
            let constraints = resolve_constraints(&name, field_type, column.constraints)?;

            fields.push(FieldSpec {
                name,
                field_type,
                constraints,
            });
        }

        Ok(Self::new(fields)?.with_header(raw.header))
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a valid schema; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All field names in column order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Whether the schema document asked for a header row.
    pub fn header(&self) -> bool {
        self.header
    }

    /// Check that every sequence column can number `record_count` records
    /// without leaving the `i64` range.
    pub fn check_sequences(&self, record_count: u64) -> Result<(), SchemaError> {
        let Some(last_index) = record_count.checked_sub(1) else {
            return Ok(());
        };
        for field in &self.fields {
            if let Constraints::Sequence { start } = field.constraints {
                let last = i64::try_from(last_index)
                    .ok()
                    .and_then(|offset| start.checked_add(offset));
                if last.is_none() {
                    return Err(SchemaError::invalid(
                        &field.name,
                        format!("sequence starting at {start} overflows i64 within {record_count} records"),
                    ));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
