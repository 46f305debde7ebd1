use crate::app::state::ConsoleState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.nav_link_active)
    } else {
        (theme.border, theme.nav_link)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// The command field.
pub struct CommandInput<'a> {
    pub console: &'a ConsoleState<'a>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for CommandInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel("COMMAND", self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut field = self.console.input.clone();
        field.set_style(self.theme.input);
        field.set_placeholder_text("stop number, route, or `stops <location>`");
        field.set_placeholder_style(self.theme.dimmed);
        field.set_cursor_line_style(Style::default());
        if !self.focused {
            field.set_cursor_style(self.theme.input);
        }
        Widget::render(&*field, inner, buf);
    }
}

/// The submit control. Disabled while a submission is in flight.
pub struct SubmitButton<'a> {
    pub console: &'a ConsoleState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (style, border) = if self.console.is_in_flight() {
            (self.theme.submit_disabled, self.theme.border)
        } else {
            (self.theme.submit, self.theme.border_focus)
        };
        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", self.console.submit_label()),
            style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
        .render(area, buf);
    }
}

/// Bouncing bar for an indeterminate wait.
pub fn progress_bar(width: usize, frame: u64) -> String {
    const BLOCK: usize = 6;
    if width == 0 {
        return String::new();
    }
    let block = BLOCK.min(width);
    let span = width - block;
    let pos = if span == 0 {
        0
    } else {
        let period = span * 2;
        let step = (frame as usize) % period;
        if step <= span {
            step
        } else {
            period - step
        }
    };
    let mut bar = "▱".repeat(pos);
    bar.push_str(&"▰".repeat(block));
    bar.push_str(&"▱".repeat(width - pos - block));
    bar
}

/// The output surface, or the progress indicator while waiting.
pub struct OutputPane<'a> {
    pub console: &'a ConsoleState<'a>,
    pub theme: &'a Theme,
    pub spinner: &'a str,
    pub frame: u64,
    pub focused: bool,
}

impl Widget for OutputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = panel("OUTPUT", self.focused, self.theme);
        if let (Some(command), Some(at)) =
            (&self.console.last_command, &self.console.answered_at)
        {
            block = block.title_bottom(Line::from(vec![Span::styled(
                format!(" > {command} · {} ", at.format("%H:%M:%S")),
                self.theme.output_meta,
            )]));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if self.console.shows_progress() {
            let width = inner.width.saturating_sub(4) as usize;
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    progress_bar(width, self.frame),
                    self.theme.progress,
                )),
                Line::from(vec![
                    Span::styled(self.spinner, self.theme.progress),
                    Span::raw(" waiting for the server"),
                ]),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let text = self
            .console
            .output
            .as_ref()
            .map(|o| o.as_str())
            .unwrap_or_default();
        Paragraph::new(text)
            .style(self.theme.output)
            .wrap(Wrap { trim: false })
            .scroll((self.console.output_scroll, 0))
            .render(inner, buf);
    }
}

/// Example commands; each one submits itself when activated.
pub struct SuggestionList<'a> {
    pub suggestions: &'a [String],
    pub theme: &'a Theme,
    pub focused: bool,
}

impl StatefulWidget for SuggestionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|s| ListItem::new(Line::from(Span::styled(s.as_str(), self.theme.suggestion))))
            .collect();

        let highlight = if self.focused {
            self.theme.suggestion_selected
        } else {
            self.theme.highlight
        };

        StatefulWidget::render(
            List::new(items)
                .block(panel("TRY", self.focused, self.theme))
                .highlight_style(highlight)
                .highlight_symbol("› "),
            area,
            buf,
            state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_stays_in_bounds() {
        for frame in 0..50 {
            let bar = progress_bar(20, frame);
            assert_eq!(bar.chars().count(), 20);
            assert_eq!(bar.chars().filter(|c| *c == '▰').count(), 6);
        }
        assert_eq!(progress_bar(3, 7).chars().count(), 3);
        assert_eq!(progress_bar(0, 7), "");
    }
}
