//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod help;
mod layout;
mod search_input;
mod styles;

pub use detail::RecordDetail;
pub use help::render_help_overlay;
pub use layout::{render_layout, truncate_to_width};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette, MUTED_TEXT, SECTION_HEADER};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::source::RowSource;
use crate::state::{search_input_handler, Action, AppState, FocusPane, SearchState, StatusMessage};
use crate::store::RecordStore;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Poll timeout; keeps the loop responsive to resize events.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Settings for one interactive session, resolved by the CLI layer.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Cap on autocomplete rows.
    pub max_suggestions: usize,
    /// Navigation actions applied before the first frame.
    pub startup: Vec<Action>,
    /// Color output.
    pub color: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: Box<dyn RowSource>,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        source: Box<dyn RowSource>,
        app_state: AppState,
        palette: Palette,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            source,
            key_bindings: KeyBindings::default(),
            palette,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every key press
    /// and resize; idle polling draws nothing.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle keyboard input
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Typing owns the keyboard until Enter or Esc
        if let SearchState::Typing { .. } = self.app_state.search {
            self.handle_typing_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.app_state.help_visible && !action.allowed_during_help() {
            return false;
        }

        debug!(?action, "Key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.help_visible = !self.app_state.help_visible,
            KeyAction::Cancel => {
                if self.app_state.focus == FocusPane::Tags {
                    self.app_state.focus = FocusPane::Results;
                }
            }
            KeyAction::MoveUp => self.app_state.move_up(),
            KeyAction::MoveDown => self.app_state.move_down(),
            KeyAction::MoveToTop => self.app_state.move_to_top(),
            KeyAction::MoveToBottom => self.app_state.move_to_bottom(),
            KeyAction::TagLeft => self.app_state.tag_left(),
            KeyAction::TagRight => self.app_state.tag_right(),
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::Activate => {
                self.app_state.activate();
            }
            KeyAction::GoBack => {
                if self.app_state.navigation().can_go_back() {
                    self.app_state.dispatch(Action::GoBack);
                } else {
                    self.app_state
                        .set_status(StatusMessage::Info("Already at the start".to_string()));
                }
            }
            KeyAction::GoForward => {
                if self.app_state.navigation().can_go_forward() {
                    self.app_state.dispatch(Action::GoForward);
                } else {
                    self.app_state
                        .set_status(StatusMessage::Info("Nothing to go forward to".to_string()));
                }
            }
            KeyAction::Clear => self.app_state.dispatch(Action::Clear),
            KeyAction::Refresh => self.refresh(),
        }

        false
    }

    fn handle_typing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => self
                .app_state
                .edit_search(|s| search_input_handler::handle_char_input(s, ch)),
            KeyCode::Backspace => self
                .app_state
                .edit_search(search_input_handler::handle_backspace),
            KeyCode::Left => self
                .app_state
                .edit_search(search_input_handler::handle_cursor_left),
            KeyCode::Right => self
                .app_state
                .edit_search(search_input_handler::handle_cursor_right),
            KeyCode::Down => self.app_state.suggestion_down(),
            KeyCode::Up => self.app_state.suggestion_up(),
            KeyCode::Enter => self.app_state.submit_search(),
            KeyCode::Esc => self.app_state.cancel_search(),
            _ => {}
        }
    }

    /// Reload the table from the source.
    ///
    /// On failure the previous store stays in place and the error goes to
    /// the status bar.
    fn refresh(&mut self) {
        match RecordStore::load(self.source.as_ref()) {
            Ok(store) => {
                let count = store.len();
                info!(count, origin = store.origin(), "Reloaded materials");
                self.app_state.replace_store(store);
                self.app_state
                    .set_status(StatusMessage::Info(format!("Reloaded {count} materials")));
            }
            Err(e) => {
                warn!(error = %e, "Refresh failed; keeping previous data");
                self.app_state
                    .set_status(StatusMessage::Error(format!("Refresh failed: {e}")));
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = &self.palette;
        self.terminal
            .draw(|frame| layout::render_layout(frame, state, palette))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Crate-internal constructors and accessors used by the acceptance harness.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        source: Box<dyn RowSource>,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            source,
            key_bindings,
            palette: Palette::default(),
        }
    }

    /// Current app state.
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render one frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Backing terminal, for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run an interactive session over an already loaded `store` until the
/// user quits. `source` is kept for refresh.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_session(
    store: RecordStore,
    source: Box<dyn RowSource>,
    options: SessionOptions,
) -> Result<(), TuiError> {
    let mut app_state = AppState::new(store).with_max_suggestions(options.max_suggestions);
    for action in options.startup {
        app_state.dispatch(action);
    }

    let mut app = TuiApp::new(source, app_state, Palette::new(options.color))?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
