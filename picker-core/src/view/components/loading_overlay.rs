//! src/view/components/loading_overlay.rs
//! ============================================================
//! Indeterminate loading box: message and elapsed time.

use crate::model::ui_state::LoadingState;
use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct LoadingOverlay;

impl LoadingOverlay {
    pub fn render(frame: &mut Frame<'_>, loading: &LoadingState, rect: Rect) {
        let elapsed = loading.start_time.elapsed();

        frame.render_widget(Clear, rect);

        let chrome = Block::default()
            .title(" Loading ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND).fg(theme::FOREGROUND));

        let text = Text::from(vec![
            Line::from(Span::styled(
                loading.message.as_str(),
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Elapsed: {elapsed:.0?}")),
        ]);

        frame.render_widget(
            Paragraph::new(text)
                .block(chrome)
                .alignment(Alignment::Center),
            rect,
        );
    }
}
