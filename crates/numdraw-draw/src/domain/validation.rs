//! Draw request validation.
//!
//! Pure checks run before any sampling: structural validity of the raw
//! inputs, range ordering, and (for duplicate-free draws) remaining
//! capacity in the target session.

use numdraw_core::error::DomainError;
use serde_json::Value;

/// Largest `count` a single draw may request.
pub const MAX_DRAW_COUNT: u32 = 1_000_000;

/// Validated draw parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawParameters {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Number of values to produce.
    pub count: u32,
}

impl DrawParameters {
    /// Number of distinct values in `[min, max]`.
    #[must_use]
    pub fn range_size(&self) -> u64 {
        range_size(self.min, self.max)
    }

    /// Whether `value` lies inside `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Number of distinct values in `[min, max]`, saturating at `u64::MAX`.
#[must_use]
pub fn range_size(min: i64, max: i64) -> u64 {
    max.abs_diff(min).saturating_add(1)
}

/// Validates raw JSON inputs for `min`, `max` and `count`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if any input is not a finite integer,
/// if `min > max`, or if `count` is outside `1..=MAX_DRAW_COUNT`.
pub fn validate_raw(min: &Value, max: &Value, count: &Value) -> Result<DrawParameters, DomainError> {
    let min = parse_integer("min", min)?;
    let max = parse_integer("max", max)?;
    let count = parse_integer("count", count)?;
    validate(min, max, count)
}

/// Validates already-typed draw inputs.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `min > max` or if `count` is outside
/// `1..=MAX_DRAW_COUNT`.
pub fn validate(min: i64, max: i64, count: i64) -> Result<DrawParameters, DomainError> {
    if min > max {
        return Err(DomainError::Validation(format!(
            "min ({min}) must be less than or equal to max ({max})"
        )));
    }
    if count < 1 {
        return Err(DomainError::Validation(format!(
            "count ({count}) must be at least 1"
        )));
    }
    let count = u32::try_from(count)
        .ok()
        .filter(|c| *c <= MAX_DRAW_COUNT)
        .ok_or_else(|| {
            DomainError::Validation(format!("count ({count}) must not exceed {MAX_DRAW_COUNT}"))
        })?;
    Ok(DrawParameters { min, max, count })
}

/// Checks that a duplicate-free draw fits in what is left of the range.
///
/// `already_used` is the number of values inside `[min, max]` the target
/// session has drawn before.
///
/// # Errors
///
/// Returns `DomainError::Capacity` carrying the shortfall when `count`
/// exceeds the unused values left in the range.
pub fn validate_capacity(params: &DrawParameters, already_used: u64) -> Result<(), DomainError> {
    let available = params.range_size().saturating_sub(already_used);
    let requested = u64::from(params.count);
    if requested > available {
        return Err(DomainError::Capacity {
            requested,
            available,
            shortfall: requested - available,
        });
    }
    Ok(())
}

/// Interprets a JSON value as an integer the way a lenient numeric form
/// field would: integral numbers and numeric strings are accepted.
///
/// # Errors
///
/// Returns `DomainError::Validation` naming `field` when the value is
/// missing, non-numeric, non-finite, fractional, or outside `i64`.
pub fn parse_integer(field: &str, raw: &Value) -> Result<i64, DomainError> {
    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    parsed.ok_or_else(|| DomainError::Validation(format!("{field} must be a finite integer")))
}

#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
fn integral(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows i64.
    let bound = i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && value >= -bound && value < bound {
        Some(value as i64)
    } else {
        None
    }
}
