use crate::domain::navigation::{is_active, NavLink, NAV_LINKS};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LOGO: &str = " TEXTABUS ";
const ACTIVE_MARKER: &str = "● ";

fn tab_text(link: &NavLink, active: bool) -> String {
    if active {
        format!(" {ACTIVE_MARKER}{} ", link.label)
    } else {
        format!(" {} ", link.label)
    }
}

/// Column ranges `[start, end)` of each nav tab, relative to the header's left edge.
pub fn tab_ranges(current_path: &str) -> Vec<(u16, u16)> {
    let mut x = LOGO.chars().count() as u16 + 1;
    NAV_LINKS
        .iter()
        .map(|link| {
            let width = tab_text(link, is_active(link.label, current_path)).chars().count() as u16;
            let range = (x, x + width);
            x += width + 1;
            range
        })
        .collect()
}

/// Index of the tab under `column`, if any.
pub fn tab_at(area: Rect, current_path: &str, column: u16) -> Option<usize> {
    let rel = column.checked_sub(area.x)?;
    tab_ranges(current_path)
        .iter()
        .position(|(start, end)| rel >= *start && rel < *end)
}

pub struct Header<'a> {
    pub current_path: &'a str,
    pub base_url: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(LOGO, self.theme.header_logo),
            Span::styled(" ", self.theme.header),
        ];
        for link in NAV_LINKS {
            let active = is_active(link.label, self.current_path);
            let style = if active {
                self.theme.nav_link_active
            } else {
                self.theme.nav_link
            };
            spans.push(Span::styled(tab_text(link, active), style));
            spans.push(Span::styled(" ", self.theme.header));
        }
        spans.push(Span::styled(
            format!(" {}", self.base_url),
            self.theme.dimmed,
        ));

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
