//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or out-of-range draw parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// More unique values were requested than the range still holds.
    #[error(
        "count ({requested}) exceeds the {available} unused values left in range (short by {shortfall})"
    )]
    Capacity {
        /// The requested count.
        requested: u64,
        /// Unused values remaining in the range for the session.
        available: u64,
        /// How many values the request is short by.
        shortfall: u64,
    },

    /// The sampler hit its attempt budget before producing enough values.
    #[error("generation exhausted after {attempts} attempts")]
    GenerationExhausted {
        /// Number of draws made before giving up.
        attempts: u64,
    },

    /// The session reference is unknown or not owned by the caller.
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// The persistence gateway rejected a draw record.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// An infrastructure failure (lock poisoning and the like).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
