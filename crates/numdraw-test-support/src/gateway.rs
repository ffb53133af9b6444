//! Test gateways: mock `DrawRecordGateway` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use numdraw_core::error::DomainError;
use numdraw_core::record::{DrawRecord, DrawRecordGateway};

/// A gateway that records every persisted draw and hands back sequential
/// identifiers (`record-1`, `record-2`, ...).
#[derive(Debug, Default)]
pub struct RecordingDrawRecordGateway {
    persisted: Mutex<Vec<DrawRecord>>,
}

impl RecordingDrawRecordGateway {
    /// Create an empty recording gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records that were persisted.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn persisted_records(&self) -> Vec<DrawRecord> {
        self.persisted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DrawRecordGateway for RecordingDrawRecordGateway {
    async fn persist(&self, record: DrawRecord) -> Result<String, DomainError> {
        let mut persisted = self.persisted.lock().unwrap();
        persisted.push(record);
        Ok(format!("record-{}", persisted.len()))
    }
}

/// A gateway that always fails. Useful for testing the soft-failure path.
#[derive(Debug)]
pub struct FailingDrawRecordGateway;

#[async_trait]
impl DrawRecordGateway for FailingDrawRecordGateway {
    async fn persist(&self, _record: DrawRecord) -> Result<String, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
