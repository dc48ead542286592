//! src/view/components/action_panel.rs
//! Open/Select bar for the highlighted directory. Its height is driven by
//! the slide animation, so it may be drawn partially.

use crate::{
    model::{nav_state::NavState, picker_mode::PickerMode},
    view::theme,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct ActionPanel;

impl ActionPanel {
    pub fn render(frame: &mut Frame<'_>, mode: PickerMode, nav: &NavState, area: Rect) {
        frame.render_widget(Clear, area);

        let select_hint = match mode {
            PickerMode::SeekDirectory => "Select this folder",
            PickerMode::SeekFile => "Browse",
        };

        let key = Style::default().fg(theme::YELLOW).bold();
        let line = Line::from(vec![
            Span::styled("[o]", key),
            Span::raw(" Open   "),
            Span::styled("[s]", key),
            Span::raw(format!(" {select_hint}   ")),
            Span::styled(
                nav.highlighted().name.to_string(),
                Style::default().fg(theme::CYAN),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND).fg(theme::FOREGROUND));

        frame.render_widget(
            Paragraph::new(line)
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
    }
}
