//! Navigation state machine.
//!
//! `NavigationState` holds the committed search text, the current selection
//! and the back/forward stacks. Every transition is a pure function of the
//! state and an [`Action`]; [`reduce`] is the single entry point the shell
//! dispatches through.
//!
//! History rule: every selection change pushes the state being left onto
//! `history` and discards `forward`. Committing a search resets both stacks.

use std::fmt;

// ===== Selection =====

/// The entity currently drilled into. At most one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Nothing selected; results follow the search text.
    #[default]
    None,
    /// A specific material, matched by exact title.
    Title(String),
    /// A category, difficulty, grade or keyword value.
    Tag(String),
}

impl Selection {
    /// Whether nothing is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => Ok(()),
            Selection::Title(title) => write!(f, "title {title}"),
            Selection::Tag(tag) => write!(f, "tag {tag}"),
        }
    }
}

// ===== Snapshot =====

/// One `(search_text, selection)` pair, as stored on the history stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Committed search text.
    pub search_text: String,
    /// Active selection.
    pub selection: Selection,
}

impl Snapshot {
    /// Search text with surrounding whitespace removed. Empty means no filter.
    pub fn query(&self) -> &str {
        self.search_text.trim()
    }
}

// ===== Action =====

/// User intents the navigation reducer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commit new search text, dropping selection and history.
    CommitSearch(String),
    /// Open one material by title.
    SelectSuggestion(String),
    /// Drill into a tag.
    SelectTag(String),
    /// Restore the previous snapshot.
    GoBack,
    /// Re-apply the snapshot left by the last `GoBack`.
    GoForward,
    /// Reset everything to the initial state.
    Clear,
}

// ===== NavigationState =====

/// Search text, selection and history for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Snapshot,
    history: Vec<Snapshot>,
    forward: Vec<Snapshot>,
}

impl NavigationState {
    /// Fresh state: empty search, no selection, empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed search text, as entered.
    pub fn search_text(&self) -> &str {
        &self.current.search_text
    }

    /// Active selection.
    pub fn selection(&self) -> &Selection {
        &self.current.selection
    }

    /// Current `(search_text, selection)` pair.
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Back stack, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Forward stack, oldest first; the last element is restored next.
    pub fn forward(&self) -> &[Snapshot] {
        &self.forward
    }

    /// Whether `go_back` would move.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether `go_forward` would move.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Set new search text. Clears selection, history and forward.
    pub fn commit_search(&mut self, text: impl Into<String>) {
        self.current = Snapshot {
            search_text: text.into(),
            selection: Selection::None,
        };
        self.history.clear();
        self.forward.clear();
    }

    /// Open one material. Pushes the current state first.
    pub fn select_suggestion(&mut self, title: impl Into<String>) {
        self.push_and_select(Selection::Title(title.into()));
    }

    /// Drill into a tag. Pushes the current state first.
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.push_and_select(Selection::Tag(tag.into()));
    }

    /// Restore the previous snapshot. Returns `false` when history is empty.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                let left = std::mem::replace(&mut self.current, previous);
                self.forward.push(left);
                true
            }
            None => false,
        }
    }

    /// Re-apply the snapshot left by `go_back`. Returns `false` when there is
    /// nothing to redo.
    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                let left = std::mem::replace(&mut self.current, next);
                self.history.push(left);
                true
            }
            None => false,
        }
    }

    /// Reset to the initial state. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Human-readable position, e.g. `search "분수" > tag Easy`.
    pub fn breadcrumb(&self) -> String {
        let mut parts = Vec::new();
        if !self.current.query().is_empty() {
            parts.push(format!("search \"{}\"", self.current.query()));
        }
        if !self.current.selection.is_none() {
            parts.push(self.current.selection.to_string());
        }
        if parts.is_empty() {
            "all materials".to_string()
        } else {
            parts.join(" > ")
        }
    }

    fn push_and_select(&mut self, selection: Selection) {
        let next = Snapshot {
            search_text: self.current.search_text.clone(),
            selection,
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        self.forward.clear();
    }
}

// ===== Reducer =====

/// Apply one action and return the new state.
pub fn reduce(mut state: NavigationState, action: Action) -> NavigationState {
    match action {
        Action::CommitSearch(text) => state.commit_search(text),
        Action::SelectSuggestion(title) => state.select_suggestion(title),
        Action::SelectTag(tag) => state.select_tag(tag),
        Action::GoBack => {
            state.go_back();
        }
        Action::GoForward => {
            state.go_forward();
        }
        Action::Clear => state.clear(),
    }
    state
}

/// Fold a sequence of actions over the initial state.
pub fn replay(actions: impl IntoIterator<Item = Action>) -> NavigationState {
    actions.into_iter().fold(NavigationState::new(), reduce)
}

/// Actions reproducing a start position given on the command line.
///
/// Applied in order: search, then title, then tag. A later selection
/// replaces an earlier one but stays reachable with back. Blank titles and
/// tags are skipped; selections are never empty.
pub fn startup_actions(
    search: Option<&str>,
    title: Option<&str>,
    tag: Option<&str>,
) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(text) = search {
        actions.push(Action::CommitSearch(text.to_string()));
    }
    if let Some(title) = title.filter(|title| !title.trim().is_empty()) {
        actions.push(Action::SelectSuggestion(title.to_string()));
    }
    if let Some(tag) = tag.filter(|tag| !tag.trim().is_empty()) {
        actions.push(Action::SelectTag(tag.to_string()));
    }
    actions
}

// ===== Tests =====

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
