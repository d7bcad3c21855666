//! Search input state machine.
//!
//! SearchState is a sum type for the search bar:
//! - Inactive: the bar shows the committed search text read-only
//! - Typing: the user is editing a draft that is not yet committed
//!
//! The draft only reaches the navigation state on submit.

// ===== SearchState =====

/// Search bar state. Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    /// Not editing.
    #[default]
    Inactive,
    /// User is typing. `cursor` counts characters, not bytes.
    Typing {
        /// Draft text.
        query: String,
        /// Cursor position in characters, `0..=query.chars().count()`.
        cursor: usize,
    },
}

impl SearchState {
    /// Start typing with `query` prefilled and the cursor at the end.
    pub fn typing(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        SearchState::Typing { query, cursor }
    }

    /// Whether the user is currently typing.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchState::Typing { .. })
    }

    /// Draft text, if typing.
    pub fn draft(&self) -> Option<&str> {
        match self {
            SearchState::Typing { query, .. } => Some(query),
            SearchState::Inactive => None,
        }
    }
}

/// Byte offset of the `char_index`-th character, or `text.len()` past the end.
pub fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
