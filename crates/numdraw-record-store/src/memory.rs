//! In-memory implementation of the `DrawRecordGateway` trait.
//!
//! Records live for the process lifetime. Swap in a durable gateway behind
//! the same trait when draws need to survive restarts.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use numdraw_core::error::DomainError;
use numdraw_core::record::{DrawRecord, DrawRecordGateway};

/// Process-local draw record store.
#[derive(Debug, Default)]
pub struct InMemoryDrawRecordStore {
    records: Mutex<Vec<(String, DrawRecord)>>,
}

impl InMemoryDrawRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<(String, DrawRecord)>>, DomainError> {
        self.records
            .lock()
            .map_err(|e| DomainError::Persistence(format!("record store mutex poisoned: {e}")))
    }
}

#[cfg(test)]
impl InMemoryDrawRecordStore {
    fn find(&self, record_id: &str) -> Option<DrawRecord> {
        self.lock()
            .ok()?
            .iter()
            .find(|(id, _)| id == record_id)
            .map(|(_, record)| record.clone())
    }

    fn len(&self) -> usize {
        self.lock().map_or(0, |records| records.len())
    }
}

#[async_trait]
impl DrawRecordGateway for InMemoryDrawRecordStore {
    async fn persist(&self, record: DrawRecord) -> Result<String, DomainError> {
        let record_id = Uuid::now_v7().to_string();
        debug!(%record_id, session_id = %record.session_id, "storing draw record");
        self.lock()?.push((record_id.clone(), record));
        Ok(record_id)
    }
}
