//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - record index
//! - `{uuid}` - UUID drawn from the record's random stream
//! - `{rand:N}` - random N-digit number

use super::uuid::random_uuid_v4;
use datahobbit_core::schema::MAX_RAND_DIGITS;
use datahobbit_core::Value;
use rand::Rng;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> Value {
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &random_uuid_v4(rng).to_string(), 1);
    }

    // Replace {rand:N} placeholders left to right; a malformed one ends the scan.
    let mut cursor = 0;
    while let Some(offset) = result[cursor..].find("{rand:") {
        let start = cursor + offset;
        let Some(close) = result[start..].find('}') else {
            break;
        };
        let end = start + close;
        let Some(digits) = result[start + 6..end]
            .parse::<usize>()
            .ok()
            .filter(|n| *n <= MAX_RAND_DIGITS)
        else {
            break;
        };
        let random_num = generate_random_digits(rng, digits);
        result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
        cursor = start + random_num.len();
    }

    Value::String(result)
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    let mut result = String::with_capacity(digits);

    for position in 0..digits {
        // First digit should be 1-9 to avoid leading zeros
        let low = if position == 0 { 1 } else { 0 };
        result.push(char::from(b'0' + rng.gen_range(low..10u8)));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}@example.com", &mut rng, 123);

        assert_eq!(value, Value::String("user_123@example.com".to_string()));
    }

    #[test]
    fn test_generate_pattern_uuid_is_seeded() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let value1 = generate_pattern("id-{uuid}", &mut rng1, 0);
        let value2 = generate_pattern("id-{uuid}", &mut rng2, 0);

        let s = value1.as_str().unwrap();
        assert!(s.starts_with("id-"));
        assert_eq!(s.len(), 3 + 36); // "id-" + UUID
        assert_eq!(value1, value2);
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{rand:6}", &mut rng, 0);

        let s = value.as_str().unwrap();
        assert!(s.starts_with("code-"));
        assert_eq!(s.len(), 5 + 6);
        let random_part = &s[5..];
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
        assert!(!random_part.starts_with('0'));
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}_code_{rand:4}-{rand:2}", &mut rng, 42);

        let s = value.as_str().unwrap();
        assert!(s.starts_with("user_42_code_"));
        // "user_42_code_" (13) + 4 digits + "-" + 2 digits
        assert_eq!(s.len(), 13 + 4 + 1 + 2);
    }

    #[test]
    fn test_generate_pattern_malformed_placeholder_is_kept() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("x{rand:abc}", &mut rng, 0);
        assert_eq!(value, Value::String("x{rand:abc}".to_string()));

        let huge = "x{rand:18446744073709551615}";
        assert_eq!(generate_pattern(huge, &mut rng, 0), Value::String(huge.to_string()));
    }
}
