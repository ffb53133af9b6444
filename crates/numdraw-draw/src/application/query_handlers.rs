//! Query handlers for the Draw context.
//!
//! Read-only views over the session store, always scoped to the caller.

use chrono::{DateTime, Utc};
use numdraw_core::error::DomainError;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers::resolve_owned;
use crate::domain::policy::DrawPolicy;
use crate::domain::session::{OwnerScope, Session, SessionStore};

/// Summary of a session for listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryView {
    /// The session identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Creation time (serialized as ISO-8601).
    pub created_at: DateTime<Utc>,
    /// Number of distinct values drawn so far.
    pub drawn_count: usize,
}

impl From<&Session> for SessionSummaryView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            name: session.name.clone(),
            created_at: session.created_at,
            drawn_count: session.drawn_count(),
        }
    }
}

/// Full view of a session including its history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The session identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Creation time (serialized as ISO-8601).
    pub created_at: DateTime<Utc>,
    /// Number of distinct values drawn so far.
    pub drawn_count: usize,
    /// Every value drawn so far, ascending.
    pub drawn_numbers: Vec<i64>,
}

/// Lists the caller's sessions, most recently created first.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the session store lock is
/// poisoned.
pub fn list_sessions(
    owner: Option<&str>,
    sessions: &SessionStore,
) -> Result<Vec<SessionSummaryView>, DomainError> {
    sessions.transaction(|table| {
        table
            .list(OwnerScope::Of(owner))
            .into_iter()
            .map(SessionSummaryView::from)
            .collect()
    })
}

/// Retrieves one of the caller's sessions by identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidSession` if the id is unknown or the session
/// is not visible to the caller, and `DomainError::Infrastructure` if the
/// session store lock is poisoned.
pub fn get_session_by_id(
    session_id: &str,
    owner: Option<&str>,
    policy: &DrawPolicy,
    sessions: &SessionStore,
) -> Result<SessionView, DomainError> {
    sessions.transaction(|table| {
        resolve_owned(table, session_id, owner, policy).map(|session| SessionView {
            id: session.id,
            name: session.name.clone(),
            created_at: session.created_at,
            drawn_count: session.drawn_count(),
            drawn_numbers: session.drawn_sorted(),
        })
    })?
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use numdraw_core::error::DomainError;
    use numdraw_test_support::FixedClock;
    use uuid::Uuid;

    use super::{get_session_by_id, list_sessions};
    use crate::domain::policy::DrawPolicy;
    use crate::domain::session::SessionStore;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_list_sessions_scopes_to_owner_and_orders_newest_first() {
        let sessions = SessionStore::new();
        let earlier = fixed_clock();
        let later = FixedClock(earlier.0 + Duration::minutes(1));
        sessions
            .create(Some("First".into()), Some("alice".into()), &earlier)
            .unwrap();
        let second = sessions
            .create(Some("Second".into()), Some("alice".into()), &later)
            .unwrap();
        sessions
            .create(Some("Other".into()), Some("bob".into()), &later)
            .unwrap();
        sessions.add_drawn(second, &[4, 8]).unwrap();

        let views = list_sessions(Some("alice"), &sessions).unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, second);
        assert_eq!(views[0].name, "Second");
        assert_eq!(views[0].drawn_count, 2);
        assert_eq!(views[1].name, "First");
    }

    #[test]
    fn test_session_summary_serializes_camel_case_iso_dates() {
        let sessions = SessionStore::new();
        sessions
            .create(Some("Lotto".into()), None, &fixed_clock())
            .unwrap();

        let views = list_sessions(None, &sessions).unwrap();
        let json = serde_json::to_value(&views[0]).unwrap();

        assert_eq!(json["name"], "Lotto");
        assert_eq!(json["createdAt"], "2026-01-15T10:00:00Z");
        assert_eq!(json["drawnCount"], 0);
    }

    #[test]
    fn test_get_session_by_id_returns_sorted_history() {
        let sessions = SessionStore::new();
        let id = sessions.create(None, None, &fixed_clock()).unwrap();
        sessions.add_drawn(id, &[9, -2, 4]).unwrap();

        let view =
            get_session_by_id(&id.to_string(), None, &DrawPolicy::default(), &sessions).unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.drawn_count, 3);
        assert_eq!(view.drawn_numbers, vec![-2, 4, 9]);
    }

    #[test]
    fn test_get_session_by_id_hides_foreign_and_unknown_sessions() {
        let sessions = SessionStore::new();
        let id = sessions
            .create(None, Some("bob".into()), &fixed_clock())
            .unwrap();

        let foreign =
            get_session_by_id(&id.to_string(), Some("alice"), &DrawPolicy::default(), &sessions);
        assert!(matches!(foreign, Err(DomainError::InvalidSession(_))));

        let unknown = get_session_by_id(
            &Uuid::new_v4().to_string(),
            None,
            &DrawPolicy::default(),
            &sessions,
        );
        assert!(matches!(unknown, Err(DomainError::InvalidSession(_))));
    }
}
