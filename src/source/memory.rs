//! In-memory queue store.

use crate::model::{BackendError, QueueEntry, QueueFilter, QueueRecord, StatusUpdate};
use crate::source::QueueBackend;
use tracing::debug;

/// Queue backend holding records in process.
///
/// Accepted updates are kept in order so tests can see what the desk sent.
/// A failure can be armed for the next update to exercise the error path.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: Vec<QueueRecord>,
    accepted: Vec<StatusUpdate>,
    fail_next: Option<String>,
}

impl MemoryBackend {
    /// Backend holding `records`.
    pub fn new(records: Vec<QueueRecord>) -> Self {
        Self {
            records,
            accepted: Vec::new(),
            fail_next: None,
        }
    }

    /// Make the next `update_status` call fail with `reason`.
    pub fn fail_next_update(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    /// Current records.
    pub fn records(&self) -> &[QueueRecord] {
        &self.records
    }

    /// Updates accepted so far, oldest first.
    pub fn accepted_updates(&self) -> &[StatusUpdate] {
        &self.accepted
    }
}

impl QueueBackend for MemoryBackend {
    fn load(&mut self, filter: &QueueFilter) -> Result<Vec<QueueEntry>, BackendError> {
        Ok(self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .map(|record| record.entry.clone())
            .collect())
    }

    fn update_status(&mut self, update: &StatusUpdate) -> Result<(), BackendError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(BackendError::Rejected(reason));
        }
        let record = self
            .records
            .iter_mut()
            .find(|record| record.date == update.date && record.entry.id() == &update.id)
            .ok_or_else(|| BackendError::NotFound(update.id.clone()))?;

        record
            .entry
            .record_update(update.status, update.checkin_time);
        self.accepted.push(update.clone());
        debug!(id = %update.id, status = %update.status, "Stored status update in memory");
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
