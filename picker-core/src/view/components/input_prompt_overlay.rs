//! ``src/view/components/input_prompt_overlay.rs``
//! ============================================================================
//! # `InputPromptOverlay`: folder naming prompt

use crate::view::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct InputPromptOverlay;

impl InputPromptOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(frame: &mut Frame<'_>, input: &str, area: Rect) {
        let input_area = Rect {
            height: 3.min(area.height),
            ..area
        };
        frame.render_widget(Clear, input_area);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(" New Folder ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND));

        let input_paragraph = Paragraph::new(input)
            .block(input_block)
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: false });

        frame.render_widget(input_paragraph, input_area);

        let typed = (input.chars().count() as u16 + 1).min(input_area.width.saturating_sub(2));
        frame.set_cursor_position((input_area.x + typed, input_area.y + 1));

        let help_paragraph = Paragraph::new("Type name • Enter to create • Esc to cancel")
            .style(Style::default().fg(theme::COMMENT).bg(theme::BACKGROUND))
            .alignment(Alignment::Center);

        let help_area = Rect {
            x: input_area.x,
            y: input_area.y + input_area.height,
            width: input_area.width,
            height: 1,
        };

        if help_area.y < area.y + area.height {
            frame.render_widget(Clear, help_area);
            frame.render_widget(help_paragraph, help_area);
        }
    }
}
