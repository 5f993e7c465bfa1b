//! Queue backends.
//!
//! The desk never owns queue records; it loads them from and submits status
//! changes to a backend:
//! - [`FileBackend`]: JSON file on disk standing in for the hospital service
//! - [`MemoryBackend`]: in-process records, used by tests and the acceptance harness

use crate::model::{BackendError, QueueEntry, QueueFilter, StatusUpdate};

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// The service that owns and persists queue records.
///
/// Every failure leaves stored records unchanged.
pub trait QueueBackend {
    /// Ordered queue entries for one day (and optionally one department).
    fn load(&mut self, filter: &QueueFilter) -> Result<Vec<QueueEntry>, BackendError>;

    /// Persist a status change for one entry.
    fn update_status(&mut self, update: &StatusUpdate) -> Result<(), BackendError>;

    /// Short human-readable name for the header bar.
    fn describe(&self) -> String;
}

impl<B: QueueBackend + ?Sized> QueueBackend for Box<B> {
    fn load(&mut self, filter: &QueueFilter) -> Result<Vec<QueueEntry>, BackendError> {
        (**self).load(filter)
    }

    fn update_status(&mut self, update: &StatusUpdate) -> Result<(), BackendError> {
        (**self).update_status(update)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
