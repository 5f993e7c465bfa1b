//! Queue entry domain types.
//!
//! A [`QueueEntry`] is one appointment's check-in/consultation record as seen
//! by the front desk. Descriptive fields are fixed at construction. Status
//! changes go through `apply_status` (the desk's transition handler) or
//! `record_update` (backends storing a change the desk already made).

use crate::model::AppointmentId;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ===== ClockTime =====

/// Wall-clock time of day with minute precision, rendered as 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Smart constructor: hour must be 0-23 and minute 0-59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidClockTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidClockTime::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Current local wall-clock time, truncated to the minute.
    pub fn now() -> Self {
        Self::from(chrono::Local::now().time())
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for ClockTime {
    type Err = InvalidClockTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidClockTime::Malformed(s.to_string());

        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(malformed());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour = h.parse::<u8>().map_err(|_| malformed())?;
        let minute = m.parse::<u8>().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidClockTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Rejected `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidClockTime {
    /// Not of the form `H:MM` / `HH:MM`.
    #[error("Invalid time '{0}': expected HH:MM")]
    Malformed(String),
    /// Hour or minute outside the 24-hour clock.
    #[error("Time out of range: {hour}:{minute}")]
    OutOfRange {
        /// Parsed hour.
        hour: u8,
        /// Parsed minute.
        minute: u8,
    },
}

// ===== QueueStatus =====

/// Where an appointment is in the check-in/consultation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueStatus {
    /// Booked, patient not yet arrived.
    Scheduled,
    /// Patient has checked in and is waiting.
    Waiting,
    /// Vitals taken, ready to be called in.
    Ready,
    /// With the doctor.
    InConsultation,
    /// Consultation finished.
    Completed,
    /// Patient did not show up.
    NoShow,
}

impl QueueStatus {
    /// Every status, in workflow order.
    pub const ALL: [QueueStatus; 6] = [
        QueueStatus::Scheduled,
        QueueStatus::Waiting,
        QueueStatus::Ready,
        QueueStatus::InConsultation,
        QueueStatus::Completed,
        QueueStatus::NoShow,
    ];

    /// Wire name (`"in-consultation"`, `"no-show"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Scheduled => "scheduled",
            QueueStatus::Waiting => "waiting",
            QueueStatus::Ready => "ready",
            QueueStatus::InConsultation => "in-consultation",
            QueueStatus::Completed => "completed",
            QueueStatus::NoShow => "no-show",
        }
    }

    /// Human-readable label for the queue table.
    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Scheduled => "Scheduled",
            QueueStatus::Waiting => "Waiting",
            QueueStatus::Ready => "Ready",
            QueueStatus::InConsultation => "In Consultation",
            QueueStatus::Completed => "Completed",
            QueueStatus::NoShow => "No Show",
        }
    }

    /// Forward step along the main workflow.
    ///
    /// `scheduled → waiting → ready → in-consultation → completed`.
    /// Terminal statuses have no next step.
    pub fn next_in_workflow(&self) -> Option<QueueStatus> {
        match self {
            QueueStatus::Scheduled => Some(QueueStatus::Waiting),
            QueueStatus::Waiting => Some(QueueStatus::Ready),
            QueueStatus::Ready => Some(QueueStatus::InConsultation),
            QueueStatus::InConsultation => Some(QueueStatus::Completed),
            QueueStatus::Completed | QueueStatus::NoShow => None,
        }
    }

    /// Completed and no-show entries stay in the view but go no further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueueStatus::Completed | QueueStatus::NoShow)
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Priority =====

/// Triage priority. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Regular appointment.
    #[default]
    Routine,
    /// Should be seen soon.
    Urgent,
    /// Should be seen immediately.
    Emergency,
}

impl Priority {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Routine => "Routine",
            Priority::Urgent => "Urgent",
            Priority::Emergency => "Emergency",
        }
    }
}

// ===== QueueEntry =====

/// One appointment in the check-in queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    id: AppointmentId,
    patient_name: String,
    patient_id: String,
    doctor_name: String,
    department: String,
    appointment_time: ClockTime,
    #[serde(default)]
    checkin_time: Option<ClockTime>,
    status: QueueStatus,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    estimated_wait: u32,
}

impl QueueEntry {
    /// Create a scheduled, routine entry with no estimated wait.
    pub fn new(
        id: AppointmentId,
        patient_name: impl Into<String>,
        patient_id: impl Into<String>,
        doctor_name: impl Into<String>,
        department: impl Into<String>,
        appointment_time: ClockTime,
    ) -> Self {
        Self {
            id,
            patient_name: patient_name.into(),
            patient_id: patient_id.into(),
            doctor_name: doctor_name.into(),
            department: department.into(),
            appointment_time,
            checkin_time: None,
            status: QueueStatus::Scheduled,
            priority: Priority::Routine,
            estimated_wait: 0,
        }
    }

    /// Builder: initial status as supplied by the backend.
    pub fn with_status(mut self, status: QueueStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: check-in time as supplied by the backend.
    pub fn with_checkin_time(mut self, time: ClockTime) -> Self {
        self.checkin_time = Some(time);
        self
    }

    /// Builder: triage priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Builder: externally estimated wait in minutes.
    pub fn with_estimated_wait(mut self, minutes: u32) -> Self {
        self.estimated_wait = minutes;
        self
    }

    /// Appointment identifier.
    pub fn id(&self) -> &AppointmentId {
        &self.id
    }

    /// Patient display name.
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Hospital patient number.
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Attending doctor.
    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    /// Department the appointment belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Scheduled time.
    pub fn appointment_time(&self) -> ClockTime {
        self.appointment_time
    }

    /// Time the patient checked in, if they have.
    pub fn checkin_time(&self) -> Option<ClockTime> {
        self.checkin_time
    }

    /// Current lifecycle status.
    pub fn status(&self) -> QueueStatus {
        self.status
    }

    /// Triage priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Estimated wait in minutes, as supplied by the backend.
    pub fn estimated_wait(&self) -> u32 {
        self.estimated_wait
    }

    /// Move to `status`. Entering `waiting` stamps the check-in time with
    /// `now`; any other status leaves it untouched, so it is never cleared.
    pub(crate) fn apply_status(&mut self, status: QueueStatus, now: ClockTime) {
        self.status = status;
        if status == QueueStatus::Waiting {
            self.checkin_time = Some(now);
        }
    }

    /// Store a change decided elsewhere (backend side). A missing check-in
    /// time keeps the current one.
    pub(crate) fn record_update(&mut self, status: QueueStatus, checkin_time: Option<ClockTime>) {
        self.status = status;
        if let Some(time) = checkin_time {
            self.checkin_time = Some(time);
        }
    }
}

// ===== QueueRecord =====

/// Stored shape of a queue entry in a backend: the entry plus its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRecord {
    /// Appointment day.
    pub date: NaiveDate,
    /// The entry itself, flattened into the same JSON object.
    #[serde(flatten)]
    pub entry: QueueEntry,
}

impl QueueRecord {
    /// Pair an entry with its appointment day.
    pub fn new(date: NaiveDate, entry: QueueEntry) -> Self {
        Self { date, entry }
    }
}

#[cfg(test)]
#[path = "queue_entry_tests.rs"]
mod tests;
