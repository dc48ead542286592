//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole picker from the controller's
//! state; nothing here mutates it.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::{instrument, trace};

use crate::{
    controller::picker::PickerController,
    model::{
        nav_state::NavState,
        ui_state::{AnimationKind, UIOverlay, UIState},
    },
    view::components::{
        action_panel::ActionPanel, header_bar::HeaderBar,
        input_prompt_overlay::InputPromptOverlay, loading_overlay::LoadingOverlay,
        notification_overlay::NotificationOverlay, object_table::EntryTable,
        status_bar::StatusBar,
    },
};

/// Full height of the action panel once it has slid in.
pub const PANEL_HEIGHT: u16 = 3;

/// ---------------------------------------------------------------------------
/// Renderer struct (layout cache + stats)
/// ---------------------------------------------------------------------------
#[derive(Default)]
pub struct UIRenderer {
    cache: LayoutCache,
    stats: RenderStats,
}

#[derive(Default)]
struct LayoutCache {
    screen: Rect,
    panel_height: u16,
    areas: [Rect; 4],
    hit: u64,
    miss: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, f: &mut Frame<'_>, picker: &PickerController) {
        let start = Instant::now();
        let nav = picker.nav();
        let ui = picker.ui();

        let panel_height = panel_height(nav, ui, start);
        let [header, table, panel, status] = self.layout(f.area(), panel_height);

        HeaderBar::render(f, nav, ui, start, header);
        EntryTable::render(f, nav, table);
        if panel.height > 0 {
            ActionPanel::render(f, picker.launch().mode, nav, panel);
        }
        StatusBar::render(f, picker.launch(), nav, ui, status);

        self.draw_overlays(f, ui);

        let dur = start.elapsed();
        self.stats.total += dur;
        if dur.as_millis() > 16 {
            self.stats.slow += 1;
        }
        self.stats.frames += 1;
        trace!(frame = self.stats.frames, "Rendered in {:?}", dur);
    }

    fn draw_overlays(&self, f: &mut Frame<'_>, ui: &UIState) {
        let scr = f.area();

        match ui.overlay {
            UIOverlay::Loading => {
                if let Some(loading) = &ui.loading {
                    LoadingOverlay::render(f, loading, centered(scr, 40, 20));
                }
            }
            UIOverlay::Prompt => InputPromptOverlay::render(f, &ui.input, centered(scr, 50, 20)),
            UIOverlay::None => {}
        }

        if let Some(n) = &ui.notification {
            let w = (scr.width * 60) / 100;
            let r = Rect {
                x: (scr.width - w) / 2,
                y: scr.height.saturating_sub(5),
                width: w,
                height: 3.min(scr.height),
            };
            NotificationOverlay::render(f, n, r);
        }
    }

    fn layout(&mut self, scr: Rect, panel_height: u16) -> [Rect; 4] {
        if self.cache.screen == scr && self.cache.panel_height == panel_height {
            self.cache.hit += 1;
            return self.cache.areas;
        }

        self.cache.miss += 1;
        self.cache.screen = scr;
        self.cache.panel_height = panel_height;
        self.cache.areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(panel_height),
            Constraint::Length(1),
        ])
        .areas(scr);
        self.cache.areas
    }

    #[must_use]
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }
}

/// Action panel height at `now`, following its slide animation.
#[must_use]
pub fn panel_height(nav: &NavState, ui: &UIState, now: Instant) -> u16 {
    let visible = match ui.panel_animation {
        Some(anim) if !anim.is_done(now) => match anim.kind {
            AnimationKind::SlideUp => anim.progress(now),
            _ => 1.0 - anim.progress(now),
        },
        _ if nav.action_panel().is_shown() => 1.0,
        _ => 0.0,
    };
    (f32::from(PANEL_HEIGHT) * visible).ceil() as u16
}

fn centered(r: Rect, w_pct: u16, h_pct: u16) -> Rect {
    let w = (r.width * w_pct / 100).max(30).min(r.width);
    let h = (r.height * h_pct / 100).max(5).min(r.height);
    Rect {
        x: r.x + (r.width - w) / 2,
        y: r.y + (r.height - h) / 2,
        width: w,
        height: h,
    }
}

impl RenderStats {
    #[must_use]
    pub fn fps(&self) -> f64 {
        if self.frames > 0 && !self.total.is_zero() {
            self.frames as f64 / self.total.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nav_state::Transition;
    use crate::model::picker_mode::LaunchConfig;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use tokio::sync::mpsc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_loading_overlay_drawn() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut picker = PickerController::new(LaunchConfig::default(), PathBuf::from("/"), tx);
        picker.start();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut renderer = UIRenderer::new();
        terminal.draw(|f| renderer.render(f, &picker)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Loading..."));
        assert!(text.contains("Parent Directory"));
        assert_eq!(renderer.stats().frames, 1);
    }

    #[test]
    fn test_layout_cache_hit() {
        let mut r = UIRenderer::new();
        r.layout(Rect::new(0, 0, 100, 40), 0);
        r.layout(Rect::new(0, 0, 100, 40), 0);
        assert_eq!(r.cache.hit, 1);
        r.layout(Rect::new(0, 0, 100, 40), PANEL_HEIGHT);
        assert_eq!(r.cache.miss, 2);
    }

    #[test]
    fn test_panel_height_follows_slide() {
        let nav = NavState::new(PathBuf::from("/r"));
        let mut ui = UIState::new();
        let now = Instant::now();
        assert_eq!(panel_height(&nav, &ui, now), 0);

        ui.animate_panel(Transition::Enter);
        let started = ui.panel_animation.map(|a| a.started).unwrap();
        assert_eq!(panel_height(&nav, &ui, started), 0);
        assert_eq!(
            panel_height(&nav, &ui, started + Duration::from_millis(90)),
            2
        );
    }
}
