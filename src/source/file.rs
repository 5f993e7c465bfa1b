//! File-backed queue store.
//!
//! The file is a JSON array of queue records (entry fields plus `date`).
//! Updates rewrite the whole file through a sibling temp file and a rename,
//! so a crash mid-write never leaves a truncated store behind.

use crate::model::{BackendError, QueueEntry, QueueFilter, QueueRecord, StatusUpdate};
use crate::source::QueueBackend;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Queue backend reading and writing a local JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Open the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BackendError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<QueueRecord>, BackendError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| BackendError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| BackendError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_records(&self, records: &[QueueRecord]) -> Result<(), BackendError> {
        let json = serde_json::to_string_pretty(records).map_err(|source| {
            BackendError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let io_err = |source| BackendError::Io {
            path: self.path.clone(),
            source,
        };
        std::fs::write(&tmp_path, json + "\n").map_err(io_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(io_err)
    }
}

impl QueueBackend for FileBackend {
    fn load(&mut self, filter: &QueueFilter) -> Result<Vec<QueueEntry>, BackendError> {
        let records = self.read_records()?;
        let total = records.len();
        let entries: Vec<QueueEntry> = records
            .into_iter()
            .filter(|record| filter.matches(record))
            .map(|record| record.entry)
            .collect();

        info!(
            path = %self.path.display(),
            date = %filter.date,
            department = ?filter.department,
            loaded = entries.len(),
            total,
            "Loaded queue"
        );
        Ok(entries)
    }

    fn update_status(&mut self, update: &StatusUpdate) -> Result<(), BackendError> {
        // Re-read so edits made by others since the last load are kept.
        let mut records = self.read_records()?;
        let record = records
            .iter_mut()
            .find(|record| record.date == update.date && record.entry.id() == &update.id)
            .ok_or_else(|| BackendError::NotFound(update.id.clone()))?;

        record
            .entry
            .record_update(update.status, update.checkin_time);
        self.write_records(&records)?;

        debug!(id = %update.id, status = %update.status, "Stored status update");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
