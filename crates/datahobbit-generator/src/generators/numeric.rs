//! Numeric value generators.

use datahobbit_core::Value;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    if min >= max {
        return Value::Integer(min);
    }
    Value::Integer(rng.gen_range(min..=max))
}

/// Generate the sequence value for a record index.
///
/// Wraps past `i64::MAX`; runs are bounded beforehand with
/// `Schema::check_sequences`.
pub fn generate_sequence(start: i64, index: u64) -> Value {
    Value::Integer(start.wrapping_add(index as i64))
}

/// Generate a random float in `[min, max)`.
///
/// A degenerate range (`min == max`) always yields `min`.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Value {
    if min >= max {
        return Value::Float(min);
    }
    Value::Float(rng.gen_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            if let Value::Integer(v) = value {
                assert!((10..=20).contains(&v));
            } else {
                panic!("Expected Integer value");
            }
        }
    }

    #[test]
    fn test_generate_int_full_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_int_range(&mut rng, i64::MIN, i64::MAX);
        assert!(value.as_i64().is_some());
    }

    #[test]
    fn test_generate_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_int_range(&mut rng, 5, 5), Value::Integer(5));
        assert_eq!(generate_float_range(&mut rng, 2.5, 2.5), Value::Float(2.5));
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_float_range(&mut rng, 0.0, 100.0);
            if let Value::Float(v) = value {
                assert!((0.0..100.0).contains(&v));
            } else {
                panic!("Expected Float value");
            }
        }
    }

    #[test]
    fn test_generate_sequence() {
        assert_eq!(generate_sequence(1, 0), Value::Integer(1));
        assert_eq!(generate_sequence(1, 41), Value::Integer(42));
        assert_eq!(generate_sequence(-10, 3), Value::Integer(-7));
    }
}
