//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use numdraw_core::rng::DeterministicRng;

/// An RNG that always returns `min`. Suitable for tests that do not depend on
/// specific random values, or that need a range to saturate immediately.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}

/// An RNG that replays a predetermined sequence, clamped into the requested
/// range. Once the sequence is exhausted it keeps returning `min`, so a test
/// that under-provisions values sees repeats rather than a panic.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        let val = self.values.get(self.index).copied().unwrap_or(min);
        self.index += 1;
        val.clamp(min, max)
    }
}
