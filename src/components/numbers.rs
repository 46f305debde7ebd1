use crate::domain::models::NumberRow;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, StatefulWidget, Table, TableState},
};

pub const ACTION_COLUMN_WIDTH: u16 = 13;

pub struct NumbersTable<'a> {
    pub rows: &'a [NumberRow],
    pub theme: &'a Theme,
}

impl NumbersTable<'_> {
    pub fn block(theme: &Theme) -> Block<'static> {
        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("NUMBERS", theme.nav_link_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", theme.footer_segment_key),
                Span::raw(": approve/unapprove "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus)
    }
}

impl StatefulWidget for NumbersTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let header = Row::new(vec!["number", "name", "status", "action"])
            .style(self.theme.table_header);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                let (status, style) = if row.approved {
                    ("approved", self.theme.row_approved)
                } else {
                    ("unapproved", self.theme.row_unapproved)
                };
                Row::new(vec![
                    Cell::from(row.id.0.as_str()),
                    Cell::from(row.name.as_deref().unwrap_or("")),
                    Cell::from(Span::styled(status, style)),
                    Cell::from(Span::styled(
                        format!("[{}]", row.action_label()),
                        self.theme.footer_segment_key,
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(10),
                Constraint::Length(11),
                Constraint::Length(ACTION_COLUMN_WIDTH),
            ],
        )
        .header(header)
        .block(Self::block(self.theme))
        .row_highlight_style(self.theme.list_selected);

        StatefulWidget::render(table, area, buf, state);
    }
}
