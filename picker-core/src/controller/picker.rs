//! ``src/controller/picker.rs``
//! ============================================================================
//! # `PickerController`: the single writer
//!
//! Owns [`NavState`] and [`UIState`]. Every key press, tick and background
//! completion arrives here as an [`Action`] and is applied on the caller's
//! task; background work only ever reports back through the task channel.
//! A dispatch that ends the run returns the [`PickerOutcome`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use compact_str::CompactString;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::config::{Config, HeaderConfig};
use crate::controller::actions::Action;
use crate::controller::event_loop::TaskResult;
use crate::controller::handlers::{KeyRouter, ctrl, normalize};
use crate::controller::selection::{self, Activation};
use crate::error::AppError;
use crate::fs::dir_lister::DirLister;
use crate::fs::entry::Entry;
use crate::fs::folder::{FolderOutcome, spawn_create_folder};
use crate::model::nav_state::NavState;
use crate::model::outcome::PickerOutcome;
use crate::model::picker_mode::{LaunchConfig, PickerMode};
use crate::model::ui_state::{NotificationLevel, UIOverlay, UIState};
use crate::view::theme::parse_raw_color;

pub struct PickerController {
    launch: LaunchConfig,
    nav: NavState,
    ui: UIState,
    lister: DirLister,
    keys: KeyRouter,
    task_tx: UnboundedSender<TaskResult>,
    loading_message: CompactString,
}

impl PickerController {
    #[must_use]
    pub fn new(launch: LaunchConfig, root: PathBuf, task_tx: UnboundedSender<TaskResult>) -> Self {
        info!(
            mode = %launch.mode,
            request_code = launch.request_code,
            "Picker rooted at {}",
            root.display()
        );

        Self {
            launch,
            nav: NavState::new(root),
            ui: UIState::new(),
            lister: DirLister::new(task_tx.clone()),
            keys: KeyRouter::new(),
            task_tx,
            loading_message: CompactString::const_new("Loading..."),
        }
    }

    /// Take loading text, notice lifetime and header colors from `config`.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.loading_message = CompactString::from(config.loading_message.as_str());
        self.ui.notification_ttl = config.notification_ttl;
        self.apply_header(&config.header);
        self
    }

    fn apply_header(&mut self, header: &HeaderConfig) {
        if let Some(raw) = header.background.as_deref() {
            match parse_raw_color(raw) {
                Some(color) => self.ui.header.set_header_background(Some(color)),
                None => warn!("Ignoring unparseable header background {:?}", raw),
            }
        }
        if let Some(id) = header.color.as_deref() {
            self.ui.header.set_header_background_id(id);
        }
    }

    /// List the root. Call once before the first dispatch.
    pub fn start(&mut self) {
        let root = self.nav.root().to_path_buf();
        self.navigate(&root);
    }

    #[must_use]
    pub const fn launch(&self) -> LaunchConfig {
        self.launch
    }

    #[must_use]
    pub const fn nav(&self) -> &NavState {
        &self.nav
    }

    #[must_use]
    pub const fn ui(&self) -> &UIState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UIState {
        &mut self.ui
    }

    #[must_use]
    pub const fn listing_in_flight(&self) -> bool {
        self.lister.in_flight()
    }

    /// Apply one action. `Some` ends the picker.
    pub fn dispatch(&mut self, action: Action) -> Option<PickerOutcome> {
        match action {
            Action::Key(key) => {
                let translated = self.translate_key(key)?;
                return self.dispatch(translated);
            }

            Action::Resize(w, h) => {
                debug!("Terminal resized to {}x{}", w, h);
                self.ui.request_redraw();
            }

            Action::Tick => self.ui.tick(Instant::now()),

            Action::Highlight(index) => self.highlight(index),

            Action::MoveHighlightUp => {
                if let Some(index) = self.nav.step_index(-1) {
                    self.highlight(index);
                }
            }

            Action::MoveHighlightDown => {
                if let Some(index) = self.nav.step_index(1) {
                    self.highlight(index);
                }
            }

            Action::HighlightFirst => {
                if !self.nav.entries().is_empty() {
                    self.highlight(0);
                }
            }

            Action::HighlightLast => {
                if let Some(index) = self.nav.last_index() {
                    self.highlight(index);
                }
            }

            Action::Open => {
                let activation = selection::open(self.nav.highlighted());
                return self.activate(activation);
            }

            Action::Select => {
                let activation = selection::select(self.launch.mode, self.nav.highlighted());
                return self.activate(activation);
            }

            Action::GoUp => self.go_up(),

            Action::NewFolderPrompt => self.ui.open_prompt(),

            Action::PromptInput(c) => {
                if self.ui.overlay == UIOverlay::Prompt {
                    self.ui.input.push(c);
                    self.ui.request_redraw();
                }
            }

            Action::PromptBackspace => {
                if self.ui.overlay == UIOverlay::Prompt {
                    self.ui.input.pop();
                    self.ui.request_redraw();
                }
            }

            Action::PromptSubmit => {
                if self.ui.overlay == UIOverlay::Prompt {
                    let name = self.ui.close_prompt();
                    return self.dispatch(Action::SubmitFolderName(name));
                }
            }

            Action::SubmitFolderName(name) => self.create_folder(name),

            Action::CloseOverlay => {
                if self.ui.overlay == UIOverlay::Prompt {
                    self.ui.close_prompt();
                }
            }

            Action::Cancel => {
                info!("Picker cancelled");
                return Some(PickerOutcome::Cancelled {
                    request_code: self.launch.request_code,
                });
            }

            Action::TaskResult(result) => self.apply_task_result(result),
        }

        None
    }

    /// While a listing runs only Ctrl-C gets through.
    fn translate_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.ui.overlay == UIOverlay::Loading {
            return (normalize(key) == ctrl('c')).then_some(Action::Cancel);
        }
        self.keys.route(self.ui.overlay, key)
    }

    fn highlight(&mut self, index: usize) {
        if let Some(edge) = self.nav.highlight(index) {
            self.ui.animate_panel(edge);
        }
        self.ui.request_redraw();
    }

    fn activate(&mut self, activation: Activation) -> Option<PickerOutcome> {
        match activation {
            Activation::Navigate(dir) => self.navigate(&dir),

            Activation::Finalize(path) => {
                match PickerOutcome::confirmed(self.launch.request_code, path) {
                    Ok(outcome) => {
                        if self.launch.mode == PickerMode::SeekFile {
                            self.hide_action_panel();
                        }
                        info!("Picked {:?}", outcome.path());
                        return Some(outcome);
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.ui.notify(NotificationLevel::Error, e.to_string());
                    }
                }
            }

            Activation::Reject(message) => self.ui.notify(NotificationLevel::Warning, message),

            Activation::NoOp => debug!(
                "Nothing to do for {:?} in {} mode",
                self.nav.highlighted().name,
                self.launch.mode
            ),
        }

        None
    }

    fn hide_action_panel(&mut self) {
        if let Some(edge) = self.nav.hide_action_panel() {
            self.ui.animate_panel(edge);
        }
    }

    /// Hide the panel, put up the loading overlay and request `dir`.
    fn navigate(&mut self, dir: &Path) {
        self.hide_action_panel();
        self.ui.show_loading(self.loading_message.clone());
        let request_id = self.lister.request(dir);
        debug!(request_id, "Requested listing of {}", dir.display());
    }

    fn go_up(&mut self) {
        match self.nav.go_up_target().map(Path::to_path_buf) {
            Some(parent) => self.navigate(&parent),
            None => debug!("Go up ignored at {}", self.nav.current_dir().display()),
        }
    }

    fn create_folder(&mut self, name: String) {
        let current = Arc::new(self.nav.current_dir().to_path_buf());
        debug!("Creating folder {:?} under {}", name, current.display());
        spawn_create_folder(current, name, self.task_tx.clone());
    }

    fn apply_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Listing {
                request_id,
                dir,
                result,
                exec,
            } => self.apply_listing(request_id, dir, result, exec),

            TaskResult::FolderCreated { dir, result } => {
                match result {
                    Ok(FolderOutcome::Created(path)) => self.ui.notify(
                        NotificationLevel::Info,
                        format!("Created \"{}\"", relative_name(&dir, &path)),
                    ),
                    Ok(FolderOutcome::AlreadyExists(path)) => self.ui.notify(
                        NotificationLevel::Warning,
                        format!("\"{}\" already exists", relative_name(&dir, &path)),
                    ),
                    Err(e) => self.ui.notify(NotificationLevel::Error, e.to_string()),
                }

                // A newer navigation owns the screen; don't pull the user back.
                if self.lister.in_flight() || dir.as_path() != self.nav.current_dir() {
                    debug!("Skipping re-list of {} after folder creation", dir.display());
                } else {
                    let current = self.nav.current_dir().to_path_buf();
                    self.navigate(&current);
                }
            }
        }
    }

    fn apply_listing(
        &mut self,
        request_id: u64,
        dir: Arc<PathBuf>,
        result: Result<Vec<Entry>, AppError>,
        exec: Duration,
    ) {
        if !self.lister.accept(request_id) {
            debug!(request_id, "Discarding stale listing of {}", dir.display());
            return;
        }

        let entries = result.unwrap_or_else(|e| {
            warn!("{}; showing an empty listing", e);
            Vec::new()
        });

        debug!(
            request_id,
            entries = entries.len(),
            "Applying listing after {:?}",
            exec
        );

        if let Some(edge) = self.nav.apply_listing(Arc::unwrap_or_clone(dir), entries) {
            self.ui.animate_up_button(edge);
        }
        self.ui.dismiss_loading();
    }
}

fn relative_name(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
