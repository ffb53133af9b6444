//! Draw policy knobs shared by the command and query handlers.

use super::sampler::SamplerConfig;
use super::session::Session;

/// Behavior switches applied to every draw and session lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawPolicy {
    /// Whether a session referenced by id must belong to the caller.
    pub enforce_ownership: bool,
    /// Rejection sampler tunables.
    pub sampler: SamplerConfig,
}

impl DrawPolicy {
    /// Whether `owner` may use `session` when referencing it by id.
    #[must_use]
    pub fn permits(&self, session: &Session, owner: Option<&str>) -> bool {
        !self.enforce_ownership || session.is_owned_by(owner)
    }
}

impl Default for DrawPolicy {
    fn default() -> Self {
        Self {
            enforce_ownership: true,
            sampler: SamplerConfig::default(),
        }
    }
}
