use crate::app::state::{AppState, ErrorSeverity, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_items(&self) -> Vec<FooterItem> {
        if self.state.last_error.is_some() {
            return vec![item("Esc", "dismiss")];
        }

        let mut items = match self.state.focus {
            Focus::Input => vec![item("Enter", "send"), item("↓", "examples")],
            Focus::Suggestions => vec![item("j/k", "move"), item("Enter", "run")],
            Focus::Output | Focus::Page => vec![item("j/k", "scroll"), item("PgUp/Dn", "page")],
            Focus::Table => vec![item("j/k", "move"), item("Enter", "approve/unapprove")],
        };
        if self.state.focus != Focus::Input {
            items.push(item("Esc", "command"));
        }
        items.push(item("Tab", "focus"));
        items.push(item("F1-F5", "pages"));
        items.push(item("^r", "reload"));
        items.push(item("^c", "quit"));
        items
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            let style = match err.severity {
                ErrorSeverity::Info => theme.status_info,
                ErrorSeverity::Warning => theme.status_warn,
                ErrorSeverity::Error => theme.status_error,
            };
            Span::styled(
                format!("  {} {}  ", err.timestamp.format("%H:%M:%S"), err.message),
                style,
            )
        } else if state.console.is_in_flight() {
            Span::styled(format!("  {} SENDING  ", state.spinner), theme.status_info)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for item in self.get_items() {
            let width = item.key.chars().count() + item.desc.chars().count() + 4;
            if current_width + width > available_width {
                break;
            }
            spans.push(Span::styled(format!(" {} ", item.key), theme.footer_segment_key));
            spans.push(Span::styled(format!(" {} ", item.desc), theme.footer_segment_val));
            current_width += width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
