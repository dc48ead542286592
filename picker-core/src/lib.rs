pub mod error;

pub mod config;

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::{EventLoop, TaskResult};

    pub mod handlers;

    pub mod picker;
    pub use picker::PickerController;

    pub mod selection;
}

pub mod model {
    pub mod nav_state;
    pub use nav_state::{NavState, Transition, Visibility};

    pub mod outcome;
    pub use outcome::{PickerOutcome, ReportFormat, ResultStatus};

    pub mod picker_mode;
    pub use picker_mode::{LaunchConfig, PickerMode};

    pub mod ui_state;
    pub use ui_state::{LoadingState, Notification, NotificationLevel, UIOverlay, UIState};
}

pub mod view {
    pub mod icons;

    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod action_panel;
        pub use action_panel::ActionPanel;
        pub mod header_bar;
        pub use header_bar::HeaderBar;
        pub mod input_prompt_overlay;
        pub use input_prompt_overlay::InputPromptOverlay;
        pub mod loading_overlay;
        pub use loading_overlay::LoadingOverlay;
        pub mod notification_overlay;
        pub use notification_overlay::NotificationOverlay;
        pub mod object_table;
        pub use object_table::EntryTable;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub mod fs {
    pub mod dir_lister;
    pub mod entry;
    pub mod folder;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use controller::PickerController;
