//! Editing the search field.
//!
//! Each function takes the current [`SearchState`] and returns the next one.
//! Keys only edit while `Typing`; every other state passes through untouched.
//! The cursor counts characters, not bytes, so names with accents edit safely.

use crate::state::{SearchQuery, SearchState};

/// Byte offset of the `cursor`-th character (or the end of `query`).
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(query.len())
}

/// Insert `ch` at the cursor and step past it.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character left of the cursor. Nothing to delete at column 0.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Cursor one character left, stopping at the start.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Cursor one character right, stopping after the last character.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let end = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(end),
            }
        }
        other => other,
    }
}

/// Open the search field (`/`).
///
/// A submitted term is reopened for editing with the cursor at its end.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            query: String::new(),
            cursor: 0,
        },
        SearchState::Active { query } => {
            let query = query.as_str().to_string();
            let cursor = query.chars().count();
            SearchState::Typing { query, cursor }
        }
        typing @ SearchState::Typing { .. } => typing,
    }
}

/// Close the search field and drop the term (Esc).
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Apply the typed term (Enter). A blank term closes the search instead.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, .. } => match SearchQuery::new(query) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
