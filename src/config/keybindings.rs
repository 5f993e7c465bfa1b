//! Keyboard bindings configuration.

use crate::model::{KeyAction, QueueStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings plus one letter per queue status.
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
        let mut kb = Self {
            bindings: HashMap::new(),
        };

        // Selection
        kb.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext);
        kb.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev);
        kb.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        kb.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        kb.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst);
        kb.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst);
        kb.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        kb.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast);

        // Page navigation
        kb.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        kb.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        kb.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        kb.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);

        // Status changes
        for (key, status) in [
            ('c', QueueStatus::Waiting),
            ('r', QueueStatus::Ready),
            ('b', QueueStatus::InConsultation),
            ('d', QueueStatus::Completed),
            ('x', QueueStatus::NoShow),
            ('u', QueueStatus::Scheduled),
        ] {
            kb.bind(
                KeyCode::Char(key),
                KeyModifiers::NONE,
                KeyAction::SetStatus(status),
            );
        }
        kb.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Advance);

        // Search
        kb.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        kb.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        kb.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::CancelSearch);

        // Panels
        kb.bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::ToggleStats);
        kb.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        // Application controls
        kb.bind(KeyCode::Char('R'), KeyModifiers::SHIFT, KeyAction::Reload);
        kb.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        kb
    }
}
