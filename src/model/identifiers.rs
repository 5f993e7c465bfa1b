//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment identifier, assigned by the backend and used as the queue key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Smart constructor: validates non-empty appointment ID.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidAppointmentId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidAppointmentId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AppointmentId {
    type Error = InvalidAppointmentId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AppointmentId> for String {
    fn from(id: AppointmentId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejected appointment identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAppointmentId {
    /// The identifier was the empty string.
    #[error("Appointment ID cannot be empty")]
    Empty,
}

// ===== Tests =====
