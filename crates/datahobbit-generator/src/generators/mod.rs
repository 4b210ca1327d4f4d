//! Individual value generators for different field types.
//!
//! This module provides the generation logic for each type of value based on
//! the normalised constraints carried by the schema.

pub mod fake;
pub mod numeric;
pub mod pattern;
pub mod text;
pub mod timestamp;
pub mod uuid;

use datahobbit_core::{Constraints, FieldSpec, FieldType, Value};
use rand::Rng;

/// Generate a value for a schema field.
pub fn generate_value<R: Rng>(field: &FieldSpec, rng: &mut R, index: u64) -> Value {
    generate_typed(field.field_type, &field.constraints, rng, index)
}

/// Generate a value from a field type and its constraints.
///
/// `index` is the logical record index, used by sequences and `{index}`
/// pattern placeholders. Constraints produced by schema parsing are always
/// valid, so this never fails.
pub fn generate_typed<R: Rng>(
    field_type: FieldType,
    constraints: &Constraints,
    rng: &mut R,
    index: u64,
) -> Value {
    match constraints {
        Constraints::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),

        Constraints::Sequence { start } => numeric::generate_sequence(*start, index),

        Constraints::FloatRange { min, max, .. } => numeric::generate_float_range(rng, *min, *max),

        Constraints::Length { min, max } => match field_type {
            FieldType::Password => fake::generate_password(rng, *min, *max),
            _ => text::generate_alphanumeric(rng, *min, *max),
        },

        Constraints::OneOf { values } => text::generate_one_of(rng, values),

        Constraints::Pattern { pattern } => pattern::generate_pattern(pattern, rng, index),

        Constraints::TrueWeight { true_weight } => Value::Boolean(rng.gen_bool(*true_weight)),

        Constraints::DateRange { start, end } => {
            timestamp::generate_date_range(rng, *start, *end)
        }

        Constraints::TimestampRange { start, end } => {
            timestamp::generate_timestamp_range(rng, start, end)
        }

        Constraints::WordCount { min, max } => fake::generate_sentence(rng, *min, *max),

        Constraints::None => match field_type {
            FieldType::Uuid => uuid::generate_uuid_v4(rng),
            FieldType::Name
            | FieldType::FirstName
            | FieldType::LastName
            | FieldType::Email
            | FieldType::PhoneNumber
            | FieldType::Word => fake::generate_fake_text(field_type, rng),
            // Types that always carry bounds fall back to their defaults.
            other => generate_typed(other, &Constraints::default_for(other), rng, index),
        },
    }
}
