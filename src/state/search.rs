//! Search state machine and the filtered queue view.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No filter applied
//! - Typing: User is entering a term; the view filters as they type
//! - Active: Term submitted; the filter stays applied

use crate::model::QueueEntry;

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No active search.
    Inactive,
    /// User is typing a term.
    Typing {
        /// Term typed so far.
        query: String,
        /// Cursor position in characters.
        cursor: usize,
    },
    /// Search submitted.
    Active {
        /// Submitted term.
        query: SearchQuery,
    },
}

impl SearchState {
    /// Term currently filtering the queue (empty when inactive).
    pub fn term(&self) -> &str {
        match self {
            SearchState::Inactive => "",
            SearchState::Typing { query, .. } => query,
            SearchState::Active { query } => query.as_str(),
        }
    }

    /// Whether the search bar should be shown.
    pub fn is_visible(&self) -> bool {
        !matches!(self, SearchState::Inactive)
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Borrow the query as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Filtering =====

/// Entries whose patient name, patient ID or doctor name contains `term`,
/// ignoring case. Original relative order is kept.
///
/// An empty term matches every entry. Whitespace is matched like any other
/// character, so `" "` keeps only entries with a space in a searched field.
pub fn filter_queue<'a>(queue: &'a [QueueEntry], term: &str) -> Vec<&'a QueueEntry> {
    if term.is_empty() {
        return queue.iter().collect();
    }

    let term_lower = term.to_lowercase();
    queue
        .iter()
        .filter(|entry| matches_term(entry, &term_lower))
        .collect()
}

/// Match one entry against an already-lowercased term.
fn matches_term(entry: &QueueEntry, term_lower: &str) -> bool {
    [entry.patient_name(), entry.patient_id(), entry.doctor_name()]
        .iter()
        .any(|field| field.to_lowercase().contains(term_lower))
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
