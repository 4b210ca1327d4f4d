//! Realistic fake text via the `fake` crate.
//!
//! Every call draws from the caller's RNG (`fake_with_rng`), never from the
//! thread-local generator, so fake values are as reproducible as the rest.

use datahobbit_core::schema::{MAX_STRING_LENGTH, MAX_WORDS};
use datahobbit_core::{FieldType, Value};
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

/// Generate fake text for the constraint-free fake types.
///
/// Types outside that family yield a single lorem word.
pub fn generate_fake_text<R: Rng>(field_type: FieldType, rng: &mut R) -> Value {
    let text: String = match field_type {
        FieldType::Name => Name().fake_with_rng(rng),
        FieldType::FirstName => FirstName().fake_with_rng(rng),
        FieldType::LastName => LastName().fake_with_rng(rng),
        FieldType::Email => SafeEmail().fake_with_rng(rng),
        FieldType::PhoneNumber => PhoneNumber().fake_with_rng(rng),
        _ => Word().fake_with_rng(rng),
    };
    Value::String(text)
}

/// Draw a count from `[min, max]`, capped at `cap`.
fn draw_count<R: Rng>(rng: &mut R, min: usize, max: usize, cap: usize) -> usize {
    let min = min.min(cap);
    let max = max.clamp(min, cap);
    rng.gen_range(min..=max)
}

/// Generate a password with a length in `[min_len, max_len]`.
pub fn generate_password<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> Value {
    let len = draw_count(rng, min_len, max_len, MAX_STRING_LENGTH);
    let text: String = Password(len..len + 1).fake_with_rng(rng);
    Value::String(text)
}

/// Generate a sentence with a word count in `[min_words, max_words]`.
pub fn generate_sentence<R: Rng>(rng: &mut R, min_words: usize, max_words: usize) -> Value {
    let words = draw_count(rng, min_words, max_words, MAX_WORDS);
    let text: String = Sentence(words..words + 1).fake_with_rng(rng);
    Value::String(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_fake_text(FieldType::Email, &mut rng);
        assert!(value.as_str().unwrap().contains('@'));
    }

    #[test]
    fn test_names_are_not_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        for field_type in [FieldType::Name, FieldType::FirstName, FieldType::LastName] {
            let value = generate_fake_text(field_type, &mut rng);
            assert!(!value.as_str().unwrap().is_empty());
        }
    }

    #[test]
    fn test_sentence_word_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = generate_sentence(&mut rng, 3, 6);
            let words = value.as_str().unwrap().split_whitespace().count();
            assert!((3..=6).contains(&words), "got {words} words");
        }
    }

    #[test]
    fn test_counts_are_capped() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(draw_count(&mut rng, 1, usize::MAX, MAX_WORDS) <= MAX_WORDS);
        assert_eq!(draw_count(&mut rng, usize::MAX, usize::MAX, 100), 100);
        assert_eq!(draw_count(&mut rng, 9, 3, 100), 9);

        let value = generate_password(&mut rng, 4, 4);
        assert_eq!(value.as_str().unwrap().chars().count(), 4);
    }

    #[test]
    fn test_fake_text_is_seeded() {
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);
        assert_eq!(
            generate_fake_text(FieldType::Name, &mut rng1),
            generate_fake_text(FieldType::Name, &mut rng2)
        );
    }
}
