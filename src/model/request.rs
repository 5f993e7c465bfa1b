//! Requests crossing the backend boundary.

use crate::model::{AppointmentId, ClockTime, QueueRecord, QueueStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Which slice of the queue to load: one day, optionally one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueFilter {
    /// Appointment day.
    pub date: NaiveDate,
    /// Department name, compared case-insensitively. `None` means all.
    pub department: Option<String>,
}

impl QueueFilter {
    /// All departments on `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            department: None,
        }
    }

    /// Restrict to one department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Whether a stored record belongs to this slice.
    pub fn matches(&self, record: &QueueRecord) -> bool {
        if record.date != self.date {
            return false;
        }
        match &self.department {
            Some(dept) => record.entry.department().eq_ignore_ascii_case(dept),
            None => true,
        }
    }
}

/// A status change to persist.
///
/// An appointment is identified by `date` and `id` together, so an id reused
/// on another day is never touched. `checkin_time` is set only when the desk
/// moved the entry into `waiting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    /// Day of the appointment being changed.
    pub date: NaiveDate,
    /// Entry being changed.
    pub id: AppointmentId,
    /// New status.
    pub status: QueueStatus,
    /// New check-in time, if the change stamped one.
    pub checkin_time: Option<ClockTime>,
}
