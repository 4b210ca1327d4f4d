//! Plain text generators.

use datahobbit_core::Value;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate alphanumeric text with a length in `[min_len, max_len]`.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> Value {
    let len = if min_len >= max_len {
        min_len
    } else {
        rng.gen_range(min_len..=max_len)
    };

    let text: String = (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect();
    Value::String(text)
}

/// Pick one entry of `values` uniformly.
pub fn generate_one_of<R: Rng>(rng: &mut R, values: &[String]) -> Value {
    match values.len() {
        0 => Value::String(String::new()),
        len => Value::String(values[rng.gen_range(0..len)].clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphanumeric_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_alphanumeric(&mut rng, 3, 9);
            let s = value.as_str().unwrap();
            assert!((3..=9).contains(&s.len()));
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_alphanumeric_fixed_and_empty_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_alphanumeric(&mut rng, 4, 4).as_str().unwrap().len(), 4);
        assert_eq!(generate_alphanumeric(&mut rng, 0, 0), Value::String(String::new()));
    }

    #[test]
    fn test_one_of() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec!["red".to_string(), "green".to_string(), "blue".to_string()];

        for _ in 0..50 {
            let value = generate_one_of(&mut rng, &pool);
            assert!(pool.iter().any(|p| Some(p.as_str()) == value.as_str()));
        }
    }
}
