//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod filter;
pub mod navigation;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, StatusMessage, DEFAULT_MAX_SUGGESTIONS};
pub use filter::{matches_tag, suggestions, title_suggestions, visible_results};
pub use navigation::{reduce, replay, startup_actions, Action, NavigationState, Selection, Snapshot};
pub use search::SearchState;
