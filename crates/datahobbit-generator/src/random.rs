//! Explicit random-source handle.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Multiplier used to spread record indices across the seed space.
const INDEX_MIX: u64 = 0x9E3779B97F4A7C15;

/// Reproducible source of randomness for a run.
///
/// The source never hands out one shared generator. Instead each record index
/// gets its own `StdRng`, seeded from the base seed and the index, so any
/// record can be synthesised independently of the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSource {
    seed: u64,
}

impl RandomSource {
    /// Seed used when the caller does not supply one.
    pub const DEFAULT_SEED: u64 = 42;

    /// Create a random source from a base seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Compute the RNG seed for a specific record index.
    pub fn seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(INDEX_MIX))
    }

    /// A fresh generator positioned at the start of record `index`'s sub-stream.
    pub fn rng_for_index(&self, index: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed_for_index(index))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_index_same_stream() {
        let source = RandomSource::new(7);
        let a: u64 = source.rng_for_index(12).gen();
        let b: u64 = source.rng_for_index(12).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_indices_get_distinct_streams() {
        let source = RandomSource::new(7);
        let a: u64 = source.rng_for_index(0).gen();
        let b: u64 = source.rng_for_index(1).gen();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_changes_stream() {
        let a: u64 = RandomSource::new(1).rng_for_index(0).gen();
        let b: u64 = RandomSource::new(2).rng_for_index(0).gen();
        assert_ne!(a, b);
    }

    #[test]
    fn test_index_zero_uses_base_seed() {
        let source = RandomSource::default();
        assert_eq!(source.seed(), 42);
        assert_eq!(source.seed_for_index(0), 42);
    }
}
