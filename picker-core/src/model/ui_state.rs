//! UI state: overlays, loading indicator, prompt input, notices, animations.
//!
//! Everything here is presentation. Navigation lives in `NavState`.

use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::model::nav_state::Transition;
use crate::view::theme::HeaderStyle;

/// Length of every panel/up-button animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(180);

/// UI overlays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum UIOverlay {
    #[default]
    None = 0,
    /// Non-dismissable, shown while a listing runs.
    Loading = 1,
    /// Folder naming prompt.
    Prompt = 2,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Warning = 1,
    Error = 2,
}

/// Status-line notice with its own expiry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: CompactString,
    pub level: NotificationLevel,
    pub timestamp: Instant,
    pub ttl: Duration,
}

impl Notification {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.timestamp) >= self.ttl
    }
}

#[derive(Debug, Clone)]
pub struct LoadingState {
    pub message: CompactString,
    pub start_time: Instant,
}

impl LoadingState {
    pub fn new(message: impl Into<CompactString>) -> Self {
        Self {
            message: message.into(),
            start_time: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Action panel enters.
    SlideUp,
    /// Action panel leaves.
    SlideDown,
    /// Up button enters.
    RotateIn,
    /// Up button leaves.
    RotateOut,
}

impl AnimationKind {
    #[must_use]
    pub const fn for_panel(edge: Transition) -> Self {
        match edge {
            Transition::Enter => Self::SlideUp,
            Transition::Exit => Self::SlideDown,
        }
    }

    #[must_use]
    pub const fn for_up_button(edge: Transition) -> Self {
        match edge {
            Transition::Enter => Self::RotateIn,
            Transition::Exit => Self::RotateOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub kind: AnimationKind,
    pub started: Instant,
}

impl Animation {
    #[must_use]
    pub fn start(kind: AnimationKind) -> Self {
        Self {
            kind,
            started: Instant::now(),
        }
    }

    /// 0.0 at start, 1.0 when done.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        (elapsed / ANIMATION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= ANIMATION_DURATION
    }
}

#[derive(Debug)]
pub struct UIState {
    pub overlay: UIOverlay,

    pub loading: Option<LoadingState>,

    /// Text typed into the naming prompt.
    pub input: String,

    pub notification: Option<Notification>,
    pub notification_ttl: Duration,

    pub panel_animation: Option<Animation>,
    pub up_animation: Option<Animation>,

    pub header: HeaderStyle,

    redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            overlay: UIOverlay::None,
            loading: None,
            input: String::new(),
            notification: None,
            notification_ttl: Duration::from_secs(3),
            panel_animation: None,
            up_animation: None,
            header: HeaderStyle::default(),
            redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    /// Put up the loading overlay, replacing any previous one.
    pub fn show_loading(&mut self, message: impl Into<CompactString>) {
        self.loading = Some(LoadingState::new(message));
        self.overlay = UIOverlay::Loading;
        self.redraw = true;
    }

    /// Take the loading overlay down. Returns false if none was shown.
    pub fn dismiss_loading(&mut self) -> bool {
        let was_shown = self.loading.take().is_some();
        if self.overlay == UIOverlay::Loading {
            self.overlay = UIOverlay::None;
        }
        self.redraw = true;
        was_shown
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn open_prompt(&mut self) {
        self.input.clear();
        self.overlay = UIOverlay::Prompt;
        self.redraw = true;
    }

    /// Close the prompt and hand back what was typed.
    pub fn close_prompt(&mut self) -> String {
        if self.overlay == UIOverlay::Prompt {
            self.overlay = UIOverlay::None;
        }
        self.redraw = true;
        std::mem::take(&mut self.input)
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<CompactString>) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            timestamp: Instant::now(),
            ttl: self.notification_ttl,
        });
        self.redraw = true;
    }

    pub fn animate_panel(&mut self, edge: Transition) {
        self.panel_animation = Some(Animation::start(AnimationKind::for_panel(edge)));
        self.redraw = true;
    }

    pub fn animate_up_button(&mut self, edge: Transition) {
        self.up_animation = Some(Animation::start(AnimationKind::for_up_button(edge)));
        self.redraw = true;
    }

    /// Drop finished animations and expired notices. Keeps requesting
    /// redraws while anything is still moving.
    pub fn tick(&mut self, now: Instant) {
        for slot in [&mut self.panel_animation, &mut self.up_animation] {
            if let Some(anim) = *slot {
                self.redraw = true;
                if anim.is_done(now) {
                    *slot = None;
                }
            }
        }

        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
            self.redraw = true;
        }

        if self.loading.is_some() {
            // elapsed timer on the overlay
            self.redraw = true;
        }
    }
}
