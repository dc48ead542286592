//! src/view/components/status_bar.rs
//!
//! Bottom line: mode, request code and current path on the left, key hints
//! on the right.

use crate::{
    model::{nav_state::NavState, picker_mode::LaunchConfig, ui_state::UIState},
    view::theme,
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

pub struct StatusBar;

impl StatusBar {
    pub fn render(
        frame: &mut Frame<'_>,
        launch: LaunchConfig,
        nav: &NavState,
        ui: &UIState,
        area: Rect,
    ) {
        let left_text = format!(
            " {} | {} | {}",
            launch.mode,
            launch.request_code,
            nav.current_dir().display()
        );

        let right_text = if ui.is_loading() {
            "Ctrl-C cancel "
        } else {
            "↑↓ move  → open  ⏎ select  ← up  esc cancel "
        };

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left_text)
            .style(Style::default().fg(theme::FOREGROUND).bg(theme::BACKGROUND))
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(Style::default().fg(theme::COMMENT).bg(theme::BACKGROUND))
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}
