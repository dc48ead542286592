//! src/view/components/header_bar.rs
//! Title bar: up button, directory title and the new-folder hint.

use std::time::Instant;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::nav_state::NavState;
use crate::model::ui_state::{Animation, AnimationKind, UIState};
use crate::view::icons;

pub struct HeaderBar;

impl HeaderBar {
    pub fn render(frame: &mut Frame<'_>, nav: &NavState, ui: &UIState, now: Instant, area: Rect) {
        let style = ui.header.style();

        let mut spans = Vec::with_capacity(4);
        if let Some(up) = Self::up_button(nav, ui.up_animation, now) {
            spans.push(Span::styled(up, style.add_modifier(Modifier::BOLD)));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            nav.title().to_owned(),
            style.add_modifier(Modifier::BOLD),
        ));

        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(18)]).areas(area);

        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), left);
        frame.render_widget(
            Paragraph::new("[n] New folder ")
                .style(style)
                .alignment(Alignment::Right),
            right,
        );
    }

    /// Glyph for the up button, `None` once it has rotated out.
    fn up_button(nav: &NavState, anim: Option<Animation>, now: Instant) -> Option<String> {
        match anim {
            Some(a) if !a.is_done(now) => {
                let step = (a.progress(now) * (icons::ROTATE_FRAMES.len() - 1) as f32) as usize;
                let frame = match a.kind {
                    AnimationKind::RotateOut => icons::ROTATE_FRAMES.len() - 1 - step,
                    _ => step,
                };
                Some(format!(" {} ", icons::ROTATE_FRAMES[frame]))
            }
            _ if nav.up_button().is_shown() => Some(format!(" {} Up", icons::UP_ICON)),
            _ => None,
        }
    }
}
