//! Integer sampling over an inclusive range.
//!
//! Duplicate-free draws use rejection sampling against an exclusion set,
//! bounded by an attempt budget of `range_size * attempt_factor` so a
//! near-exhausted range fails deterministically instead of spinning.

use std::collections::HashSet;

use numdraw_core::error::DomainError;
use numdraw_core::record::SortOrder;
use numdraw_core::rng::DeterministicRng;

use super::validation::DrawParameters;

/// Default multiplier applied to the range size to get the attempt budget.
pub const DEFAULT_ATTEMPT_FACTOR: u64 = 10;

/// Tunables for the rejection sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Attempts allowed per value in the range.
    pub attempt_factor: u64,
}

impl SamplerConfig {
    /// Maximum number of RNG draws allowed for a range of `range_size` values.
    #[must_use]
    pub fn attempt_budget(&self, range_size: u64) -> u64 {
        range_size.saturating_mul(self.attempt_factor)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
        }
    }
}

/// Draws `params.count` distinct values from `[min, max]`, none of which are
/// in `exclude`. Values come back in the order they were first drawn.
///
/// # Errors
///
/// Returns `DomainError::GenerationExhausted` if the attempt budget runs out
/// before enough new values were found.
pub fn sample_unique(
    params: &DrawParameters,
    exclude: &HashSet<i64>,
    config: &SamplerConfig,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<i64>, DomainError> {
    let target = params.count as usize;
    let budget = config.attempt_budget(params.range_size());
    let mut fresh = HashSet::with_capacity(target);
    let mut result = Vec::with_capacity(target);
    let mut attempts: u64 = 0;

    while result.len() < target {
        if attempts >= budget {
            return Err(DomainError::GenerationExhausted { attempts });
        }
        attempts += 1;
        let value = rng.next_i64_range(params.min, params.max);
        if !exclude.contains(&value) && fresh.insert(value) {
            result.push(value);
        }
    }

    Ok(result)
}

/// Draws `params.count` independent values from `[min, max]`; repeats are
/// allowed and no history is consulted.
pub fn sample_independent(params: &DrawParameters, rng: &mut dyn DeterministicRng) -> Vec<i64> {
    (0..params.count)
        .map(|_| rng.next_i64_range(params.min, params.max))
        .collect()
}

/// Reorders `values` in place according to `order`.
pub fn apply_sort(values: &mut [i64], order: SortOrder) {
    match order {
        SortOrder::Asc => values.sort_unstable(),
        SortOrder::Desc => values.sort_unstable_by(|a, b| b.cmp(a)),
        SortOrder::None => {}
    }
}
