use crate::app::state::PageState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Read-only rendering of pages that are not the console or the numbers table.
pub struct PageView<'a> {
    pub page: &'a PageState,
    pub path: &'a str,
    pub theme: &'a Theme,
    pub spinner: &'a str,
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.page {
            PageState::Text {
                title: Some(title), ..
            } => title.clone(),
            _ => self.path.to_string(),
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.nav_link_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        match self.page {
            PageState::Text { body, scroll, .. } => Paragraph::new(body.as_str())
                .wrap(Wrap { trim: false })
                .scroll((*scroll, 0))
                .block(block)
                .render(area, buf),
            PageState::Failed(message) => Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" Could not load {} ", self.path),
                    self.theme.status_error,
                )),
                Line::from(""),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled(" r ", self.theme.footer_segment_key),
                    Span::raw(" to retry"),
                ]),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf),
            _ => Paragraph::new(Line::from(vec![
                Span::styled(self.spinner, self.theme.progress),
                Span::raw(format!(" Loading {}...", self.path)),
            ]))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf),
        }
    }
}
