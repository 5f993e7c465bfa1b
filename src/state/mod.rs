//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod search;
pub mod search_input_handler;
pub mod transition;

// Re-export for convenience
pub use app_state::{AppState, Notice, NoticeLevel, PendingChange};
pub use search::{filter_queue, SearchQuery, SearchState};
pub use transition::{
    apply_status_transition, is_workflow_transition, TransitionError, TransitionPolicy,
};
