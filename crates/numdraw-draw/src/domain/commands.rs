//! Commands for the Draw context.

use numdraw_core::record::SortOrder;
use serde_json::Value;

/// How a draw refers to its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRef {
    /// An existing session identifier.
    Id(String),
    /// A session name, reused if the caller already owns one by that name.
    Name(String),
    /// No reference; a fresh session is created.
    New,
}

impl SessionRef {
    /// Builds a reference from optional id and name fields. The id takes
    /// precedence; blank values count as absent.
    #[must_use]
    pub fn from_parts(id: Option<String>, name: Option<String>) -> Self {
        let present = |v: Option<String>| {
            v.map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
        };
        match (present(id), present(name)) {
            (Some(id), _) => Self::Id(id),
            (None, Some(name)) => Self::Name(name),
            (None, None) => Self::New,
        }
    }
}

/// Command to draw integers from a range within a session.
///
/// `min`, `max` and `count` are carried raw so validation happens in one
/// place, inside the handler.
#[derive(Debug, Clone)]
pub struct DrawNumbers {
    /// Inclusive lower bound, unvalidated.
    pub min: Value,
    /// Inclusive upper bound, unvalidated.
    pub max: Value,
    /// How many values to draw, unvalidated.
    pub count: Value,
    /// Output ordering.
    pub sort: SortOrder,
    /// Exclude repeats and values already drawn in the session.
    pub no_duplicates: bool,
    /// Forward the finished draw to the persistence gateway.
    pub persist: bool,
    /// Target session.
    pub session: SessionRef,
    /// Resolved caller identity; `None` for anonymous callers.
    pub owner: Option<String>,
}

impl DrawNumbers {
    /// A duplicate-free, unsorted, unpersisted draw in a new anonymous
    /// session.
    #[must_use]
    pub fn new(min: i64, max: i64, count: i64) -> Self {
        Self {
            min: Value::from(min),
            max: Value::from(max),
            count: Value::from(count),
            sort: SortOrder::None,
            no_duplicates: true,
            persist: false,
            session: SessionRef::New,
            owner: None,
        }
    }

    /// Sets the output ordering.
    #[must_use]
    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets whether duplicates are excluded.
    #[must_use]
    pub fn no_duplicates(mut self, no_duplicates: bool) -> Self {
        self.no_duplicates = no_duplicates;
        self
    }

    /// Sets whether the draw is persisted.
    #[must_use]
    pub fn persisted(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Sets the session reference.
    #[must_use]
    pub fn in_session(mut self, session: SessionRef) -> Self {
        self.session = session;
        self
    }

    /// Sets the caller identity.
    #[must_use]
    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Command to delete a session and its history.
#[derive(Debug, Clone)]
pub struct ClearSession {
    /// Session identifier as supplied by the caller.
    pub session_id: String,
    /// Resolved caller identity.
    pub owner: Option<String>,
}
