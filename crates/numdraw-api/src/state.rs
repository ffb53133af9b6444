//! Shared application state.

use std::sync::{Arc, Mutex};

use numdraw_core::clock::Clock;
use numdraw_core::record::DrawRecordGateway;
use numdraw_core::rng::DeterministicRng;
use numdraw_draw::domain::policy::DrawPolicy;
use numdraw_draw::domain::session::SessionStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for session stamps and `/api/time`.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Random source; locked only while sampling.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Process-wide session store.
    pub sessions: Arc<SessionStore>,
    /// Destination for draws requested with `persist`.
    pub record_gateway: Arc<dyn DrawRecordGateway>,
    /// Ownership and sampler settings.
    pub policy: DrawPolicy,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        sessions: Arc<SessionStore>,
        record_gateway: Arc<dyn DrawRecordGateway>,
        policy: DrawPolicy,
    ) -> Self {
        Self {
            clock,
            rng,
            sessions,
            record_gateway,
            policy,
        }
    }
}
