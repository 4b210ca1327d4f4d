//! UUID value generator.

use datahobbit_core::Value;
use rand::Rng;
use uuid::Uuid;

/// Build a v4 UUID from the provided RNG.
pub fn random_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Generate a random UUID v4 rendered as text.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Value {
    Value::String(random_uuid_v4(rng).to_string())
}
