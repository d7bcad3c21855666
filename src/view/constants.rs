//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width percentage of the list pane. The detail pane takes the rest.
pub const LIST_PANE_WIDTH_PERCENT: u16 = 40;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Shown in the list pane when nothing matches.
pub const NO_RESULTS_TEXT: &str = "No results";

/// Marker appended to text truncated to fit a column.
pub const ELLIPSIS: char = '…';
