//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List movement
    /// Move the highlight up one row. Default: k/↑
    MoveUp,
    /// Move the highlight down one row. Default: j/↓
    MoveDown,
    /// Move the tag highlight left. Default: h/←
    TagLeft,
    /// Move the tag highlight right. Default: l/→
    TagRight,
    /// Jump to the first row. Default: g/Home
    MoveToTop,
    /// Jump to the last row. Default: G/End
    MoveToBottom,

    // Focus
    /// Cycle focus: Results → Tags → Results. Default: Tab
    CycleFocus,

    // Search
    /// Open the search input. Default: //Ctrl+f
    StartSearch,
    /// Cancel search typing or close the help overlay. Default: Esc
    Cancel,

    // Navigation
    /// Open the highlighted title, or drill into the highlighted tag. Default: Enter
    Activate,
    /// Go back in navigation history. Default: b/Backspace
    GoBack,
    /// Go forward in navigation history. Default: f
    GoForward,
    /// Reset search, selection and history. Default: x
    Clear,

    // Application
    /// Re-fetch the materials table. Default: r
    Refresh,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action is allowed while the help overlay is visible.
    pub fn allowed_during_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit | KeyAction::Cancel)
    }
}
