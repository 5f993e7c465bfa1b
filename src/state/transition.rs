//! Queue status transitions (pure).
//!
//! [`apply_status_transition`] is the only way queue entries change. It never
//! fails and never checks legality; legality is a separate, opt-in
//! [`TransitionPolicy`] consulted by the caller before applying.

use crate::model::{AppointmentId, ClockTime, QueueEntry, QueueStatus};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Produce a new queue in which the entry with `id` has status `next`.
///
/// Same length and order as the input; every other entry is cloned
/// unchanged. Moving into `waiting` stamps the entry's check-in time with
/// `now`. An unknown `id` returns an element-wise copy of the input.
pub fn apply_status_transition(
    queue: &[QueueEntry],
    id: &AppointmentId,
    next: QueueStatus,
    now: ClockTime,
) -> Vec<QueueEntry> {
    queue
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if entry.id() == id {
                entry.apply_status(next, now);
            }
            entry
        })
        .collect()
}

/// Whether `from → to` is a step of the front-desk workflow:
/// `scheduled → waiting → ready → in-consultation → completed`, plus
/// `waiting → no-show`.
pub fn is_workflow_transition(from: QueueStatus, to: QueueStatus) -> bool {
    from.next_in_workflow() == Some(to)
        || (from == QueueStatus::Waiting && to == QueueStatus::NoShow)
}

// ===== TransitionPolicy =====

/// Which status changes the desk accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any status may be set from any other (staff override).
    #[default]
    Permissive,
    /// Only workflow steps are accepted; see [`is_workflow_transition`].
    Strict,
}

impl TransitionPolicy {
    /// Check a requested change against the policy.
    pub fn check(&self, from: QueueStatus, to: QueueStatus) -> Result<(), TransitionError> {
        match self {
            TransitionPolicy::Permissive => Ok(()),
            TransitionPolicy::Strict if is_workflow_transition(from, to) => Ok(()),
            TransitionPolicy::Strict => Err(TransitionError::Illegal { from, to }),
        }
    }

    /// Config/CLI name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPolicy::Permissive => "permissive",
            TransitionPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            _ => Err(TransitionError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Rejected status change or policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The strict policy does not allow this step.
    #[error("Cannot move from {from} to {to}")]
    Illegal {
        /// Current status.
        from: QueueStatus,
        /// Requested status.
        to: QueueStatus,
    },

    /// Policy name not recognized.
    #[error("Unknown transition policy '{0}': expected 'permissive' or 'strict'")]
    UnknownPolicy(String),
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod tests;
