//! Command handlers for the Draw context.
//!
//! `handle_draw_numbers` is the draw orchestrator: resolve the session,
//! validate, sample, commit history, then optionally persist. Everything up
//! to the commit runs under a single session-store lock; persistence runs
//! after the lock is released.

use std::collections::HashSet;
use std::sync::Mutex;

use numdraw_core::clock::Clock;
use numdraw_core::error::DomainError;
use numdraw_core::record::{DrawRecord, DrawRecordGateway};
use numdraw_core::rng::DeterministicRng;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::commands::{ClearSession, DrawNumbers, SessionRef};
use crate::domain::policy::DrawPolicy;
use crate::domain::sampler;
use crate::domain::session::{OwnerScope, Session, SessionStore, SessionTable};
use crate::domain::validation::{self, DrawParameters};

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The drawn values, ordered per the requested sort.
    pub numbers: Vec<i64>,
    /// The session the draw was recorded in.
    pub session_id: Uuid,
    /// Identifier returned by the persistence gateway, if persisted.
    pub persisted_id: Option<String>,
    /// Soft failure reported alongside the draw (persistence only).
    pub warning: Option<String>,
}

/// Where a draw lands once its session reference is resolved.
#[derive(Debug)]
enum SessionTarget {
    Existing(Uuid),
    Create { name: Option<String> },
}

/// Resolves a caller-supplied session id to a session the caller may use.
///
/// Unknown ids and ownership mismatches produce the same error so callers
/// cannot discover other owners' sessions.
pub(crate) fn resolve_owned<'t>(
    table: &'t SessionTable,
    raw_id: &str,
    owner: Option<&str>,
    policy: &DrawPolicy,
) -> Result<&'t Session, DomainError> {
    Uuid::parse_str(raw_id.trim())
        .ok()
        .and_then(|id| table.get(id))
        .filter(|session| policy.permits(session, owner))
        .ok_or_else(|| DomainError::InvalidSession(format!("session not found: {raw_id}")))
}

fn resolve_target(
    table: &SessionTable,
    reference: &SessionRef,
    owner: Option<&str>,
    policy: &DrawPolicy,
) -> Result<SessionTarget, DomainError> {
    match reference {
        SessionRef::Id(raw_id) => {
            resolve_owned(table, raw_id, owner, policy).map(|s| SessionTarget::Existing(s.id))
        }
        SessionRef::Name(name) => Ok(table
            .find_by_name(name, OwnerScope::Of(owner))
            .map_or_else(
                || SessionTarget::Create {
                    name: Some(name.clone()),
                },
                |s| SessionTarget::Existing(s.id),
            )),
        SessionRef::New => Ok(SessionTarget::Create { name: None }),
    }
}

/// Resolve, validate, sample, and commit under the caller's hold of the
/// session table. Nothing is written unless sampling succeeds.
fn draw_in_session(
    table: &mut SessionTable,
    command: &DrawNumbers,
    policy: &DrawPolicy,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<(Uuid, DrawParameters, Vec<i64>), DomainError> {
    let target = resolve_target(table, &command.session, command.owner.as_deref(), policy)?;
    let params = validation::validate_raw(&command.min, &command.max, &command.count)?;

    let numbers = {
        let existing = match &target {
            SessionTarget::Existing(id) => table.get(*id),
            SessionTarget::Create { .. } => None,
        };
        let no_history = HashSet::new();
        let history = existing.map_or(&no_history, Session::drawn);

        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;

        if command.no_duplicates {
            let used = existing.map_or(0, |s| s.drawn_in_range(params.min, params.max));
            validation::validate_capacity(&params, used)?;
            sampler::sample_unique(&params, history, &policy.sampler, &mut *rng_guard)?
        } else {
            sampler::sample_independent(&params, &mut *rng_guard)
        }
    };

    let session_id = match target {
        SessionTarget::Existing(id) => id,
        SessionTarget::Create { name } => {
            let id = table.create(name, command.owner.clone(), clock.now());
            info!(session_id = %id, "created session");
            id
        }
    };
    table.add_drawn(session_id, &numbers);

    Ok((session_id, params, numbers))
}

/// Handles the `DrawNumbers` command.
///
/// The RNG is locked only for the synchronous sampling step and never across
/// an await point. A persistence failure does not undo the draw; it is
/// reported through `DrawOutcome::warning`.
///
/// # Errors
///
/// Returns `DomainError::InvalidSession` for unknown or foreign session ids
/// (checked before the parameters), `DomainError::Validation` for malformed
/// parameters, `DomainError::Capacity` when a duplicate-free draw cannot fit,
/// `DomainError::GenerationExhausted` when the sampler runs out of attempts,
/// and `DomainError::Infrastructure` on lock poisoning.
#[instrument(skip_all, fields(no_duplicates = command.no_duplicates, sort = %command.sort))]
pub async fn handle_draw_numbers(
    command: &DrawNumbers,
    policy: &DrawPolicy,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    sessions: &SessionStore,
    gateway: &dyn DrawRecordGateway,
) -> Result<DrawOutcome, DomainError> {
    let (session_id, params, mut numbers) = sessions
        .transaction(|table| draw_in_session(table, command, policy, clock, rng))??;

    sampler::apply_sort(&mut numbers, command.sort);

    info!(
        %session_id,
        min = params.min,
        max = params.max,
        count = params.count,
        "drew numbers"
    );

    let mut outcome = DrawOutcome {
        numbers,
        session_id,
        persisted_id: None,
        warning: None,
    };

    if command.persist {
        let record = DrawRecord {
            session_id,
            min: params.min,
            max: params.max,
            count: params.count,
            sort: command.sort,
            no_duplicates: command.no_duplicates,
            numbers: outcome.numbers.clone(),
            drawn_at: clock.now(),
        };
        match gateway.persist(record).await {
            Ok(record_id) => outcome.persisted_id = Some(record_id),
            Err(e) => {
                warn!(%session_id, error = %e, "draw record was not persisted");
                outcome.warning = Some(e.to_string());
            }
        }
    }

    Ok(outcome)
}

/// Handles the `ClearSession` command: deletes the session and its history.
///
/// # Errors
///
/// Returns `DomainError::InvalidSession` if the session is unknown or not
/// owned by the caller, and `DomainError::Infrastructure` on lock poisoning.
#[instrument(skip_all, fields(session_id = %command.session_id))]
pub fn handle_clear_session(
    command: &ClearSession,
    policy: &DrawPolicy,
    sessions: &SessionStore,
) -> Result<(), DomainError> {
    sessions.transaction(|table| {
        let id = resolve_owned(table, &command.session_id, command.owner.as_deref(), policy)?.id;
        table.clear(id);
        info!(session_id = %id, "cleared session");
        Ok::<(), DomainError>(())
    })?
}
