//! Application state and transitions.
//!
//! AppState is the root state type for one browsing session. It owns the
//! record store and the navigation state, plus the presentation-only cursor
//! state the renderer needs (focus, highlighted row, highlighted tag).
//!
//! Navigation changes go through [`AppState::dispatch`], which runs the pure
//! reducer and resets the cursors. Everything the renderer shows is derived
//! on demand from the store and the navigation state: the list pane is always
//! [`visible_results`], and title suggestions appear only under the search
//! bar while the user is typing.

use crate::model::Record;
use crate::state::filter::{title_suggestions, visible_results};
use crate::state::navigation::{reduce, Action, NavigationState};
use crate::state::search::SearchState;
use crate::state::search_input_handler;
use crate::store::RecordStore;
use tracing::debug;

/// Default cap on autocomplete rows.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 20;

// ===== FocusPane =====

/// Which pane receives movement and activate keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Search bar is being edited.
    Search,
    /// Result / suggestion list.
    #[default]
    Results,
    /// Tag chips of the highlighted record.
    Tags,
}

// ===== StatusMessage =====

/// One-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Neutral feedback (e.g. refresh finished).
    Info(String),
    /// Something failed; previous data is still shown.
    Error(String),
}

impl StatusMessage {
    /// Message text.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }
}

// ===== AppState =====

/// Session state. Pure data, no I/O.
#[derive(Debug, Clone)]
pub struct AppState {
    store: RecordStore,
    navigation: NavigationState,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Search bar state (draft while typing).
    pub search: SearchState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    list_cursor: usize,
    tag_cursor: usize,
    suggestion_cursor: Option<usize>,
    max_suggestions: usize,
    status: Option<StatusMessage>,
}

impl AppState {
    /// Create a session over `store` with empty navigation state.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            navigation: NavigationState::new(),
            focus: FocusPane::Results,
            search: SearchState::Inactive,
            help_visible: false,
            list_cursor: 0,
            tag_cursor: 0,
            suggestion_cursor: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            status: None,
        }
    }

    /// Cap the number of suggestion rows (at least one).
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions.max(1);
        self
    }

    // ===== accessors =====

    /// Loaded materials.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Navigation state.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Highlighted row in the list pane.
    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// Highlighted tag chip in the detail pane.
    pub fn tag_cursor(&self) -> usize {
        self.tag_cursor
    }

    /// Highlighted autocomplete row, if any.
    pub fn suggestion_cursor(&self) -> Option<usize> {
        self.suggestion_cursor
    }

    /// Current status bar message.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Show a status bar message until the next navigation.
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    // ===== transitions =====

    /// Run one navigation action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching navigation action");
        let navigation = std::mem::take(&mut self.navigation);
        self.navigation = reduce(navigation, action);
        self.list_cursor = 0;
        self.tag_cursor = 0;
        self.status = None;
        if self.focus == FocusPane::Tags && self.highlighted_tags().is_empty() {
            self.focus = FocusPane::Results;
        }
    }

    /// Swap in a freshly loaded store. Navigation state is kept; a selection
    /// that no longer matches simply yields an empty result.
    pub fn replace_store(&mut self, store: RecordStore) {
        self.store = store;
        self.clamp_cursors();
    }

    // ===== derived views =====

    /// Records visible for the current navigation state.
    pub fn visible_results(&self) -> Vec<&Record> {
        visible_results(&self.navigation, self.store.records())
    }

    /// Autocomplete titles for the search draft, capped. Empty unless typing.
    pub fn suggestions(&self) -> Vec<&str> {
        let Some(draft) = self.search.draft() else {
            return Vec::new();
        };
        let mut titles = title_suggestions(draft, self.store.records());
        titles.truncate(self.max_suggestions);
        titles
    }

    /// Titles shown in the list pane, one row per visible record.
    pub fn list_items(&self) -> Vec<&str> {
        self.visible_results()
            .into_iter()
            .map(Record::title)
            .collect()
    }

    /// Title under the list cursor.
    pub fn highlighted_title(&self) -> Option<&str> {
        self.highlighted_record().map(Record::title)
    }

    /// Record under the list cursor.
    pub fn highlighted_record(&self) -> Option<&Record> {
        self.visible_results().get(self.list_cursor).copied()
    }

    /// Tags of the highlighted record.
    pub fn highlighted_tags(&self) -> Vec<&str> {
        self.highlighted_record()
            .map(Record::tags)
            .unwrap_or_default()
    }

    /// Whether the current state shows nothing.
    pub fn is_empty_result(&self) -> bool {
        self.visible_results().is_empty()
    }

    // ===== cursor movement =====

    /// Move the list highlight up. Saturates at the first row.
    pub fn move_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
        self.tag_cursor = 0;
    }

    /// Move the list highlight down. Saturates at the last row.
    pub fn move_down(&mut self) {
        let len = self.visible_results().len();
        if self.list_cursor + 1 < len {
            self.list_cursor += 1;
            self.tag_cursor = 0;
        }
    }

    /// Jump to the first row.
    pub fn move_to_top(&mut self) {
        self.list_cursor = 0;
        self.tag_cursor = 0;
    }

    /// Jump to the last row.
    pub fn move_to_bottom(&mut self) {
        self.list_cursor = self.visible_results().len().saturating_sub(1);
        self.tag_cursor = 0;
    }

    /// Move the tag highlight left. Saturates at the first tag.
    pub fn tag_left(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
    }

    /// Move the tag highlight right. Saturates at the last tag.
    pub fn tag_right(&mut self) {
        let len = self.highlighted_tags().len();
        if self.tag_cursor + 1 < len {
            self.tag_cursor += 1;
        }
    }

    /// Toggle focus between the list and the tag chips.
    /// Tags are skipped when the highlighted record has none.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Results if !self.highlighted_tags().is_empty() => FocusPane::Tags,
            FocusPane::Results => FocusPane::Results,
            FocusPane::Tags | FocusPane::Search => FocusPane::Results,
        };
    }

    /// Open the highlighted title, or drill into the highlighted tag.
    ///
    /// Returns `false` when there is nothing to activate.
    pub fn activate(&mut self) -> bool {
        let action = match self.focus {
            FocusPane::Tags => self
                .highlighted_tags()
                .get(self.tag_cursor)
                .map(|tag| Action::SelectTag((*tag).to_string())),
            FocusPane::Results => self
                .highlighted_title()
                .map(|title| Action::SelectSuggestion(title.to_string())),
            FocusPane::Search => None,
        };

        match action {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    // ===== search bar =====

    /// Start editing the search text.
    pub fn start_search(&mut self) {
        self.search = search_input_handler::activate_search_input(
            std::mem::take(&mut self.search),
            self.navigation.search_text(),
        );
        self.suggestion_cursor = None;
        self.focus = FocusPane::Search;
    }

    /// Commit the draft as the new search text.
    ///
    /// With a suggestion highlighted, the search is committed first and the
    /// title is then opened, so back returns to the search results.
    pub fn submit_search(&mut self) {
        let chosen = self
            .suggestion_cursor
            .and_then(|index| self.suggestions().get(index).map(|title| title.to_string()));
        let (search, action) = search_input_handler::submit_search(std::mem::take(&mut self.search));
        self.search = search;
        self.suggestion_cursor = None;
        self.focus = FocusPane::Results;
        if let Some(action) = action {
            self.dispatch(action);
        }
        if let Some(title) = chosen {
            self.dispatch(Action::SelectSuggestion(title));
        }
    }

    /// Drop the draft; the committed search text is unchanged.
    pub fn cancel_search(&mut self) {
        self.search = search_input_handler::cancel_search(std::mem::take(&mut self.search));
        self.suggestion_cursor = None;
        self.focus = FocusPane::Results;
    }

    /// Apply a draft-editing function while typing.
    ///
    /// The suggestion highlight is dropped since the rows may change.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchState) -> SearchState) {
        self.search = edit(std::mem::take(&mut self.search));
        self.suggestion_cursor = None;
    }

    /// Highlight the next suggestion. Saturates at the last one.
    pub fn suggestion_down(&mut self) {
        let len = self.suggestions().len();
        self.suggestion_cursor = match self.suggestion_cursor {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some((index + 1).min(len - 1)),
        };
    }

    /// Highlight the previous suggestion; above the first one the highlight
    /// goes back to the draft itself.
    pub fn suggestion_up(&mut self) {
        self.suggestion_cursor = match self.suggestion_cursor {
            None | Some(0) => None,
            Some(index) => Some(index - 1),
        };
    }

    fn clamp_cursors(&mut self) {
        let len = self.visible_results().len();
        self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
        let tags = self.highlighted_tags().len();
        self.tag_cursor = self.tag_cursor.min(tags.saturating_sub(1));
        if self.focus == FocusPane::Tags && tags == 0 {
            self.focus = FocusPane::Results;
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
