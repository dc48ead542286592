//! src/view/components/object_table.rs

use crate::{
    model::nav_state::NavState,
    view::{icons, theme},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

pub struct EntryTable;

impl EntryTable {
    pub fn render(frame: &mut Frame<'_>, nav: &NavState, area: Rect) {
        let rows: Vec<Row> = nav
            .entries()
            .iter()
            .map(|entry| {
                let (icon, kind, style) = if entry.is_dir {
                    (icons::FOLDER_ICON, "dir", Style::default().fg(theme::CYAN))
                } else {
                    (icons::FILE_ICON, "", Style::default().fg(theme::FOREGROUND))
                };

                Row::new(vec![
                    Cell::from(format!("{icon} {}", entry.name)),
                    Cell::from(kind),
                ])
                .style(style)
            })
            .collect();

        let widths = [Constraint::Fill(1), Constraint::Length(5)];

        let mut table_state = TableState::default().with_selected(nav.highlighted_index());

        let title = format!(" {} ", nav.current_dir().display());

        let table = Table::new(rows, widths)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(theme::PURPLE).bold())
                    .border_style(Style::default().fg(theme::COMMENT))
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .row_highlight_style(
                Style::default()
                    .bg(theme::CURRENT_LINE)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
