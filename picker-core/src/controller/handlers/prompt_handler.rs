// picker-core/src/controller/handlers/prompt_handler.rs
// Text entry for the folder naming prompt

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::controller::actions::Action;
use crate::model::ui_state::UIOverlay;

#[derive(Default)]
pub struct PromptHandler;

impl PromptHandler {
    pub fn new() -> Self {
        Self
    }
}

impl KeyHandler for PromptHandler {
    fn can_handle(&self, overlay: UIOverlay) -> bool {
        overlay == UIOverlay::Prompt
    }

    fn handle(&mut self, key_event: KeyEvent) -> Option<Action> {
        let key_event = normalize(key_event);
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => Some(Action::PromptSubmit),
            (KeyCode::Esc, _) => Some(Action::CloseOverlay),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Cancel),
            (KeyCode::Backspace, _) => Some(Action::PromptBackspace),
            (KeyCode::Char(c), KeyModifiers::NONE) if is_valid_folder_char(c) => {
                Some(Action::PromptInput(c))
            }
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "PromptHandler"
    }
}
