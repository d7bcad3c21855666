//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // List movement
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::MoveDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::MoveDown);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::MoveUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::MoveToTop);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::MoveToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::MoveToBottom);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::MoveToBottom);

        // Tag chips
        keys.bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::TagLeft);
        keys.bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::TagRight);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::TagLeft);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::TagRight);
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);

        // Search
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);

        // Navigation
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate);
        keys.bind(KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::GoBack);
        keys.bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::GoBack);
        keys.bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::GoForward);
        keys.bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::Clear);

        // Application controls
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Refresh);
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
