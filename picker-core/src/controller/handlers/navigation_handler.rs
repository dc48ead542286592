// picker-core/src/controller/handlers/navigation_handler.rs
// Browsing keys, arrows plus vim letters

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};

use super::*;
use crate::controller::actions::Action;
use crate::model::ui_state::UIOverlay;

pub struct NavigationHandler {
    bindings: HashMap<KeyEvent, Action>,
}

impl Default for NavigationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHandler {
    pub fn new() -> Self {
        let mut bindings = HashMap::with_capacity(24);

        // Arrow keys
        bindings.insert(arrow_key(KeyCode::Up), Action::MoveHighlightUp);
        bindings.insert(arrow_key(KeyCode::Down), Action::MoveHighlightDown);
        bindings.insert(arrow_key(KeyCode::Left), Action::GoUp);
        bindings.insert(arrow_key(KeyCode::Right), Action::Open);
        bindings.insert(arrow_key(KeyCode::Home), Action::HighlightFirst);
        bindings.insert(arrow_key(KeyCode::End), Action::HighlightLast);

        // Vim keys
        bindings.insert(key('k'), Action::MoveHighlightUp);
        bindings.insert(key('j'), Action::MoveHighlightDown);
        bindings.insert(key('h'), Action::GoUp);
        bindings.insert(key('l'), Action::Open);
        bindings.insert(key('g'), Action::HighlightFirst);
        bindings.insert(key('G'), Action::HighlightLast);

        // Action panel
        bindings.insert(key('o'), Action::Open);
        bindings.insert(key('s'), Action::Select);
        bindings.insert(enter_key(), Action::Select);

        // Header
        bindings.insert(key('u'), Action::GoUp);
        bindings.insert(backspace_key(), Action::GoUp);
        bindings.insert(key('n'), Action::NewFolderPrompt);

        // Back / cancel
        bindings.insert(escape_key(), Action::Cancel);
        bindings.insert(key('q'), Action::Cancel);
        bindings.insert(ctrl('c'), Action::Cancel);

        Self { bindings }
    }
}

impl KeyHandler for NavigationHandler {
    fn can_handle(&self, overlay: UIOverlay) -> bool {
        overlay == UIOverlay::None
    }

    fn handle(&mut self, key_event: KeyEvent) -> Option<Action> {
        self.bindings.get(&normalize(key_event)).cloned()
    }

    fn name(&self) -> &'static str {
        "NavigationHandler"
    }
}
