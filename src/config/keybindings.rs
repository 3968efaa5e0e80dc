//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Character keys also match with SHIFT ignored, since terminals disagree
    /// on whether shifted symbols like `?` carry the modifier.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&normalized).copied().or_else(|| match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT))
                .copied(),
            _ => None,
        })
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

        // Month navigation
        keys.bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PreviousMonth);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PreviousMonth);
        keys.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PreviousMonth);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PreviousMonth);
        keys.bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextMonth);
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextMonth);
        keys.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextMonth);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextMonth);
        keys.bind(KeyCode::Char('t'), KeyModifiers::NONE, KeyAction::GoToToday);

        // Selection
        keys.bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::ClearSelection);
        keys.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);

        // Application controls
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
