//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchState::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! Cursor positions are character indices so Hangul input edits cleanly.

use crate::state::navigation::Action;
use crate::state::search::{byte_offset, SearchState};

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } => {
            let offset = byte_offset(&query, cursor);
            query.insert(offset, ch);
            SearchState::Typing {
                query,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes the character before the cursor if cursor > 0.
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut query, cursor } if cursor > 0 => {
            let offset = byte_offset(&query, cursor - 1);
            query.remove(offset);
            SearchState::Typing {
                query,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move cursor left by one character.
/// Saturates at 0 (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => SearchState::Typing {
            query,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move cursor right by one character.
/// Saturates at the draft length (does not wrap).
///
/// Returns updated SearchState. No-op if not in Typing state.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { query, cursor } => {
            let max_cursor = query.chars().count();
            SearchState::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Activate search input mode.
/// Transitions from Inactive to Typing, prefilled with the committed text.
///
/// No-op if already Typing.
pub fn activate_search_input(state: SearchState, committed: &str) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::typing(committed),
        other => other,
    }
}

/// Cancel search input without committing the draft.
pub fn cancel_search(_state: SearchState) -> SearchState {
    SearchState::Inactive
}

/// Submit the draft.
/// Transitions from Typing to Inactive and yields the commit action.
/// An empty draft still commits: it clears the filter.
///
/// Returns `(state, None)` unchanged when not typing.
pub fn submit_search(state: SearchState) -> (SearchState, Option<Action>) {
    match state {
        SearchState::Typing { query, .. } => {
            (SearchState::Inactive, Some(Action::CommitSearch(query)))
        }
        other => (other, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
