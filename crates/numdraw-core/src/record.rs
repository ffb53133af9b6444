//! Persistence gateway abstraction for finished draws.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Ordering applied to a draw's output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending numeric order.
    Asc,
    /// Descending numeric order.
    Desc,
    /// Generation order.
    #[default]
    None,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            "none" | "" => Ok(Self::None),
            other => Err(DomainError::Validation(format!(
                "sort must be one of asc, desc, none (got {other:?})"
            ))),
        }
    }
}

/// A finished draw handed to the persistence gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    /// Session the draw belongs to.
    pub session_id: Uuid,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Number of values requested.
    pub count: u32,
    /// Ordering applied to `numbers`.
    pub sort: SortOrder,
    /// Whether duplicate exclusion was requested.
    pub no_duplicates: bool,
    /// The produced values.
    pub numbers: Vec<i64>,
    /// Time the draw completed.
    pub drawn_at: DateTime<Utc>,
}

/// Gateway that durably records finished draws.
///
/// Ownership of the record passes to the gateway; on success it returns an
/// opaque identifier for the stored record.
#[async_trait]
pub trait DrawRecordGateway: Send + Sync {
    /// Persist a draw record and return its identifier.
    async fn persist(&self, record: DrawRecord) -> Result<String, DomainError>;
}
