//! Error types for qdesk.
//!
//! Errors are split by concern with `thiserror` and compose through `From`
//! so the shell can use `?` everywhere.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from startup and the main loop
//!   - [`BackendError`] - queue backend failures (load or status update)
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup
//!   - `std::io::Error` - terminal failures
//!
//! # Recovery Strategy
//!
//! Backend errors raised by a status update are **non-fatal**: the queue is
//! left unchanged and the message is shown as a notice in the status bar.
//! Backend errors during the initial load, config errors and terminal errors
//! are fatal and propagate to `main`.

use crate::model::AppointmentId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The queue backend failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// No queue file was given on the command line, in the environment or in
    /// the config file.
    #[error("No queue file: pass a path or set queue_file in the config")]
    NoQueueFile,

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failures at the boundary to the service that owns queue records.
///
/// Every variant means the stored record is unchanged.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The queue store does not exist.
    #[error("Queue file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading or writing the queue store failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The queue store is not valid queue JSON.
    #[error("Invalid queue data in {path}: {source}")]
    Malformed {
        /// Path with bad content.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No record with this appointment ID exists.
    #[error("Appointment {0} not found")]
    NotFound(AppointmentId),

    /// The service refused the update.
    #[error("Update rejected: {0}")]
    Rejected(String),
}
