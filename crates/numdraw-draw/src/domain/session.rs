//! Sessions and the in-process session store.
//!
//! A session remembers every value ever returned for it. The store is the
//! single authority for session lifecycle; it knows nothing about callers,
//! so ownership checks live with the draw handlers.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use numdraw_core::clock::Clock;
use numdraw_core::error::DomainError;
use uuid::Uuid;

/// A named, optionally owned record of previously drawn values.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Owner identifier; `None` for anonymous sessions.
    pub owner: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    drawn: HashSet<i64>,
    sequence: u64,
}

impl Session {
    /// Every value drawn in this session so far.
    #[must_use]
    pub fn drawn(&self) -> &HashSet<i64> {
        &self.drawn
    }

    /// Number of distinct values drawn so far.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Number of drawn values that fall inside `[min, max]`.
    #[must_use]
    pub fn drawn_in_range(&self, min: i64, max: i64) -> u64 {
        self.drawn.iter().filter(|v| (min..=max).contains(*v)).count() as u64
    }

    /// Drawn values in ascending order, for display.
    #[must_use]
    pub fn drawn_sorted(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.drawn.iter().copied().collect();
        values.sort_unstable();
        values
    }

    /// Whether this session belongs to `owner` (`None` meaning anonymous).
    #[must_use]
    pub fn is_owned_by(&self, owner: Option<&str>) -> bool {
        self.owner.as_deref() == owner
    }

    /// Ordering key: newer sessions compare greater.
    fn recency(&self) -> (DateTime<Utc>, u64) {
        (self.created_at, self.sequence)
    }
}

/// Which sessions a lookup may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerScope<'a> {
    /// Every session regardless of owner.
    Any,
    /// Only sessions whose owner equals the given one (`None` = anonymous).
    Of(Option<&'a str>),
}

impl OwnerScope<'_> {
    fn admits(self, session: &Session) -> bool {
        match self {
            Self::Any => true,
            Self::Of(owner) => session.is_owned_by(owner),
        }
    }
}

/// Builds the label given to sessions created without a name.
#[must_use]
pub fn default_session_name(created_at: DateTime<Utc>) -> String {
    format!("Session {}", created_at.format("%Y-%m-%d %H:%M:%S"))
}

/// The unlocked session map. Obtained through [`SessionStore::transaction`]
/// when several operations must observe a consistent view.
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: HashMap<Uuid, Session>,
    next_sequence: u64,
}

impl SessionTable {
    /// Creates a session with an empty drawn-set and returns its identifier.
    pub fn create(
        &mut self,
        name: Option<String>,
        owner: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::now_v7();
        let name = name.unwrap_or_else(|| default_session_name(created_at));
        self.next_sequence += 1;
        self.sessions.insert(
            id,
            Session {
                id,
                name,
                owner,
                created_at,
                drawn: HashSet::new(),
                sequence: self.next_sequence,
            },
        );
        id
    }

    /// Looks up a session by identifier.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Finds a session by exact name within `scope`. When several match, the
    /// most recently created one wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str, scope: OwnerScope<'_>) -> Option<&Session> {
        self.sessions
            .values()
            .filter(|s| s.name == name && scope.admits(s))
            .max_by_key(|s| s.recency())
    }

    /// Records `values` as drawn. Unknown ids are ignored.
    pub fn add_drawn(&mut self, id: Uuid, values: &[i64]) {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.drawn.extend(values.iter().copied());
        }
    }

    /// Number of distinct values drawn in a session; zero if unknown.
    #[must_use]
    pub fn drawn_count(&self, id: Uuid) -> usize {
        self.sessions.get(&id).map_or(0, Session::drawn_count)
    }

    /// Removes a session. Returns `true` iff it existed.
    pub fn clear(&mut self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Sessions within `scope`, most recently created first.
    #[must_use]
    pub fn list(&self, scope: OwnerScope<'_>) -> Vec<&Session> {
        let mut sessions: Vec<&Session> =
            self.sessions.values().filter(|s| scope.admits(s)).collect();
        sessions.sort_by_key(|s| std::cmp::Reverse(s.recency()));
        sessions
    }

    /// Total number of sessions held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the table holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Thread-safe session store, constructed once per process and shared by
/// reference.
///
/// Every method takes the store lock for its own duration. Use
/// [`SessionStore::transaction`] to run a read-check-write sequence under a
/// single acquisition.
#[derive(Debug, Default)]
pub struct SessionStore {
    table: Mutex<SessionTable>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionTable>, DomainError> {
        self.table
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("session store mutex poisoned: {e}")))
    }

    /// Runs `f` with exclusive access to the session table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn transaction<R>(&self, f: impl FnOnce(&mut SessionTable) -> R) -> Result<R, DomainError> {
        let mut table = self.lock()?;
        Ok(f(&mut table))
    }

    /// Creates a session stamped with `clock`'s current time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn create(
        &self,
        name: Option<String>,
        owner: Option<String>,
        clock: &dyn Clock,
    ) -> Result<Uuid, DomainError> {
        let now = clock.now();
        self.transaction(|t| t.create(name, owner, now))
    }

    /// Returns a snapshot of the session with `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn get(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        self.transaction(|t| t.get(id).cloned())
    }

    /// Returns a snapshot of the newest session named `name` within `scope`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn find_by_name(
        &self,
        name: &str,
        scope: OwnerScope<'_>,
    ) -> Result<Option<Session>, DomainError> {
        self.transaction(|t| t.find_by_name(name, scope).cloned())
    }

    /// Records `values` as drawn in session `id`; no-op if unknown.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn add_drawn(&self, id: Uuid, values: &[i64]) -> Result<(), DomainError> {
        self.transaction(|t| t.add_drawn(id, values))
    }

    /// Number of distinct values drawn in session `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn drawn_count(&self, id: Uuid) -> Result<usize, DomainError> {
        self.transaction(|t| t.drawn_count(id))
    }

    /// Deletes session `id`. Returns `true` iff it existed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn clear(&self, id: Uuid) -> Result<bool, DomainError> {
        self.transaction(|t| t.clear(id))
    }

    /// Snapshots of the sessions within `scope`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the lock is poisoned.
    pub fn list(&self, scope: OwnerScope<'_>) -> Result<Vec<Session>, DomainError> {
        self.transaction(|t| t.list(scope).into_iter().cloned().collect())
    }
}
