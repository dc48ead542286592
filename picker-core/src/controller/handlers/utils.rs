use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::actions::Action;
use crate::model::ui_state::UIOverlay;

/// Key handler trait for modular input processing.
pub trait KeyHandler: Send {
    /// Check if this handler owns input while `overlay` is up.
    fn can_handle(&self, overlay: UIOverlay) -> bool;

    /// Translate one key press. `None` when the key is unbound.
    fn handle(&mut self, key: KeyEvent) -> Option<Action>;

    /// Handler name for debugging.
    fn name(&self) -> &'static str;
}

/// Strip what the terminal adds but bindings don't care about: event kind,
/// keyboard state, and SHIFT on characters that already carry their case.
pub fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn arrow_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

pub fn escape_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Characters accepted by the naming prompt. `/` is allowed and makes
/// nested folders. `..` segments are refused when the folder is created.
pub fn is_valid_folder_char(c: char) -> bool {
    !c.is_control() && !matches!(c, '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}
