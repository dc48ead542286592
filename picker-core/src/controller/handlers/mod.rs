pub mod navigation_handler;
pub use navigation_handler::NavigationHandler;

pub mod prompt_handler;
pub use prompt_handler::PromptHandler;

pub mod utils;
pub use utils::*;

use crossterm::event::KeyEvent;
use tracing::trace;

use crate::controller::actions::Action;
use crate::model::ui_state::UIOverlay;

/// Routes a key to the first handler that owns the current overlay.
pub struct KeyRouter {
    handlers: Vec<Box<dyn KeyHandler>>,
}

impl Default for KeyRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyRouter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(PromptHandler::new()),
                Box::new(NavigationHandler::new()),
            ],
        }
    }

    pub fn route(&mut self, overlay: UIOverlay, key: KeyEvent) -> Option<Action> {
        let handler = self.handlers.iter_mut().find(|h| h.can_handle(overlay))?;
        let action = handler.handle(key);
        trace!(
            handler = handler.name(),
            "Key {:?} -> {:?}",
            key.code,
            action
        );
        action
    }
}
