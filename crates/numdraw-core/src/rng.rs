//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a seedable `StdRng`. In tests,
//! a fixed or sequence-driven implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over uniform integer generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a uniformly distributed `i64` in `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;
}

/// Production RNG backed by `rand`'s standard generator.
///
/// Not suitable for cryptographic use.
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for StdRandom {
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.0.random_range(min..=max)
    }
}
