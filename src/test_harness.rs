//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating user
//! interactions in acceptance tests.

use crate::config::keybindings::KeyBindings;
use crate::source::{CsvSource, RowSource};
use crate::state::AppState;
use crate::store::RecordStore;
use crate::model::AppError;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

/// Fixture shared by the acceptance tests.
pub const MATERIALS_FIXTURE: &str = "tests/fixtures/materials.csv";

/// Convert a ratatui buffer to a string representation.
///
/// Cells hidden behind a wide (e.g. Hangul) grapheme are skipped so text
/// reads as typed. Empty lines are removed to keep output readable.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut hidden = 0;
        for x in area.left()..area.right() {
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            hidden = symbol.width().saturating_sub(1);
            line.push_str(symbol);
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a CSV fixture with default terminal size (100x30)
    pub fn from_fixture(path: &str) -> Result<Self, AppError> {
        Self::from_fixture_with_size(path, 100, 30)
    }

    /// Load a CSV fixture with custom terminal size
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, AppError> {
        Self::from_source(Box::new(CsvSource::new(path)), width, height)
    }

    /// Build from any row source. The source is also used for refresh.
    pub fn from_source(
        source: Box<dyn RowSource>,
        width: u16,
        height: u16,
    ) -> Result<Self, AppError> {
        let terminal = Terminal::new(TestBackend::new(width, height)).map_err(TuiError::from)?;
        let store = RecordStore::load(source.as_ref())?;
        let app = TuiApp::new_for_test(
            terminal,
            AppState::new(store),
            source,
            KeyBindings::default(),
        );

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns `true` if app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping at quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text as individual character key events.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Open the search bar, type `text`, and submit.
    pub fn search(&mut self, text: &str) {
        self.send_key(KeyCode::Char('/'));
        // clear the prefilled draft
        while self.state().search.draft().is_some_and(|draft| !draft.is_empty()) {
            self.send_key(KeyCode::Backspace);
        }
        self.type_text(text);
        self.send_key(KeyCode::Enter);
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
