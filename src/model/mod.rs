//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod queue_entry;
pub mod request;
pub mod stats;

// Re-export for convenience
pub use error::{AppError, BackendError};
pub use identifiers::{AppointmentId, InvalidAppointmentId};
pub use key_action::KeyAction;
pub use queue_entry::{
    ClockTime, InvalidClockTime, Priority, QueueEntry, QueueRecord, QueueStatus,
};
pub use request::{QueueFilter, StatusUpdate};
pub use stats::QueueStats;
