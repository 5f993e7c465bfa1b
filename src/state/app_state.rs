//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions following Elm architecture;
//! talking to the backend is the shell's job (see `view`).

use crate::model::{
    BackendError, ClockTime, QueueEntry, QueueFilter, QueueStats, QueueStatus, StatusUpdate,
};
use crate::state::search::{filter_queue, SearchState};
use crate::state::transition::{apply_status_transition, TransitionError, TransitionPolicy};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Queue**: replaced wholesale on load/reload, otherwise changed only by
///   committing a [`PendingChange`] built from the transition handler.
/// - **Search**: Inactive → Typing → Active → Inactive; the visible rows are
///   the queue filtered by the current term.
/// - **Selection**: an index into the visible rows, clamped on every read.
///
/// Derived values (visible rows, stats) are recomputed on each call.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded queue, in backend order.
    queue: Vec<QueueEntry>,

    /// Slice of the queue being shown (day and department).
    pub filter: QueueFilter,

    /// Which status changes are accepted.
    pub policy: TransitionPolicy,

    /// Current search state.
    search: SearchState,

    /// Selected row within the visible rows.
    selected: usize,

    /// Whether the statistics panel is visible.
    pub stats_visible: bool,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Last outcome shown in the status bar.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Create state for a freshly loaded queue.
    pub fn new(queue: Vec<QueueEntry>, filter: QueueFilter, policy: TransitionPolicy) -> Self {
        Self {
            queue,
            filter,
            policy,
            search: SearchState::Inactive,
            selected: 0,
            stats_visible: false,
            help_visible: false,
            notice: None,
        }
    }

    /// The full, unfiltered queue.
    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    /// Replace the queue after a reload.
    ///
    /// Keeps the same appointment selected when it is still visible.
    pub fn replace_queue(&mut self, queue: Vec<QueueEntry>) {
        let selected_id = self.selected_entry().map(|e| e.id().clone());
        self.queue = queue;
        self.selected = selected_id
            .and_then(|id| self.visible_entries().iter().position(|e| *e.id() == id))
            .unwrap_or(0);
    }

    /// Rows matching the current search term, in queue order.
    pub fn visible_entries(&self) -> Vec<&QueueEntry> {
        filter_queue(&self.queue, self.search.term())
    }

    /// Summary over the full queue (the filter does not apply).
    pub fn stats(&self) -> QueueStats {
        QueueStats::compute(&self.queue)
    }

    // ===== Search =====

    /// Current search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Replace the search state. A changed term moves selection to the
    /// first row.
    pub fn set_search(&mut self, search: SearchState) {
        if search.term() != self.search.term() {
            self.selected = 0;
        }
        self.search = search;
    }

    // ===== Selection =====

    /// Selected row index within the visible rows, if any row is visible.
    pub fn selected_index(&self) -> Option<usize> {
        let len = self.visible_entries().len();
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    /// Selected entry, if any row is visible.
    pub fn selected_entry(&self) -> Option<&QueueEntry> {
        let index = self.selected_index()?;
        self.visible_entries().into_iter().nth(index)
    }

    /// Move selection down by `rows`, stopping at the last row.
    pub fn select_down(&mut self, rows: usize) {
        if let Some(current) = self.selected_index() {
            let last = self.visible_entries().len() - 1;
            self.selected = current.saturating_add(rows).min(last);
        }
    }

    /// Move selection up by `rows`, stopping at the first row.
    pub fn select_up(&mut self, rows: usize) {
        if let Some(current) = self.selected_index() {
            self.selected = current.saturating_sub(rows);
        }
    }

    /// Select the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Select the last row.
    pub fn select_last(&mut self) {
        self.selected = self.visible_entries().len().saturating_sub(1);
    }

    // ===== Status changes =====

    /// Build the change that sets the selected entry to `target`.
    ///
    /// Returns `Ok(None)` when nothing is selected or the entry already has
    /// that status. Returns an error when the policy forbids the step.
    pub fn prepare_status_change(
        &self,
        target: QueueStatus,
        now: ClockTime,
    ) -> Result<Option<PendingChange>, TransitionError> {
        let Some(entry) = self.selected_entry() else {
            return Ok(None);
        };
        let from = entry.status();
        if from == target {
            return Ok(None);
        }
        self.policy.check(from, target)?;

        let queue = apply_status_transition(&self.queue, entry.id(), target, now);
        Ok(Some(PendingChange {
            update: StatusUpdate {
                date: self.filter.date,
                id: entry.id().clone(),
                status: target,
                checkin_time: (target == QueueStatus::Waiting).then_some(now),
            },
            from,
            patient_name: entry.patient_name().to_string(),
            queue,
        }))
    }

    /// Build the change that moves the selected entry one workflow step on.
    ///
    /// Terminal entries have no next step and yield `Ok(None)`.
    pub fn prepare_advance(&self, now: ClockTime) -> Result<Option<PendingChange>, TransitionError> {
        match self.selected_entry().and_then(|e| e.status().next_in_workflow()) {
            Some(next) => self.prepare_status_change(next, now),
            None => Ok(None),
        }
    }

    /// The backend accepted the change: adopt the new queue.
    pub fn commit(&mut self, change: PendingChange) {
        self.notice = Some(Notice::info(format!(
            "{} ({}): {} → {}",
            change.patient_name, change.update.id, change.from, change.update.status
        )));
        self.queue = change.queue;
    }

    /// The backend refused the change: keep the queue, surface the error.
    pub fn reject(&mut self, change: &PendingChange, error: &BackendError) {
        self.notice = Some(Notice::error(format!(
            "Could not update {}: {}",
            change.update.id, error
        )));
    }

    /// Surface a policy refusal.
    pub fn refuse(&mut self, error: &TransitionError) {
        self.notice = Some(Notice::error(error.to_string()));
    }
}

// ===== PendingChange =====

/// A status change computed locally, waiting for the backend to accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    /// What to send to the backend.
    pub update: StatusUpdate,
    /// Status before the change.
    pub from: QueueStatus,
    patient_name: String,
    queue: Vec<QueueEntry>,
}

impl PendingChange {
    /// The queue as it will be once the change is committed.
    pub fn candidate(&self) -> &[QueueEntry] {
        &self.queue
    }
}

// ===== Notice =====

/// Severity of a status bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Something succeeded.
    Info,
    /// Something failed; state is unchanged.
    Error,
}

/// One-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// Success notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Failure notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
