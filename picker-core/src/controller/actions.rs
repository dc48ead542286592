//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Picker Commands
//!
//! Every user input and background completion becomes an `Action`, and
//! `PickerController::dispatch` is the only place that acts on them.

use crate::controller::event_loop::TaskResult;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum Action {
    /// A raw key, translated by the key handlers.
    Key(KeyEvent),

    /// A terminal resize event.
    Resize(u16, u16),

    /// Periodic tick for animations and notice expiry.
    Tick,

    /// Highlight the entry at this index.
    Highlight(usize),

    MoveHighlightUp,

    MoveHighlightDown,

    HighlightFirst,

    HighlightLast,

    /// Enter the highlighted directory.
    Open,

    /// Finalize or navigate, depending on the picker mode.
    Select,

    /// List the parent directory.
    GoUp,

    /// Show the folder naming prompt.
    NewFolderPrompt,

    PromptInput(char),

    PromptBackspace,

    /// Confirm the prompt with what was typed.
    PromptSubmit,

    /// Folder name handed to the creation bridge.
    SubmitFolderName(String),

    /// Close the naming prompt without creating anything.
    CloseOverlay,

    /// Global back/cancel.
    Cancel,

    /// A background task finished.
    TaskResult(TaskResult),
}
