use crate::app::state::{AppState, Focus, PageState};
use crate::components::console::{CommandInput, OutputPane, SubmitButton, SuggestionList};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::numbers::NumbersTable;
use crate::components::page_view::PageView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub const SUBMIT_WIDTH: u16 = 9;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub struct ConsoleLayout {
    pub input: Rect,
    pub submit: Rect,
    pub output: Rect,
    pub suggestions: Rect,
}

pub fn console_layout(body: Rect, has_suggestions: bool) -> ConsoleLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SUBMIT_WIDTH)])
        .split(rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if has_suggestions {
            [Constraint::Percentage(65), Constraint::Percentage(35)]
        } else {
            [Constraint::Percentage(100), Constraint::Percentage(0)]
        })
        .split(rows[1]);

    ConsoleLayout {
        input: form[0],
        submit: form[1],
        output: panes[0],
        suggestions: panes[1],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    // --- Header ---
    f.render_widget(
        Header {
            current_path: &app_state.current_path,
            base_url: &app_state.base_url,
            theme: &app_state.theme,
        },
        layout.header,
    );

    // --- Body ---
    let theme = &app_state.theme;
    match &mut app_state.page {
        PageState::Console => {
            let console = &mut app_state.console;
            let areas = console_layout(layout.body, !console.suggestions.is_empty());

            f.render_widget(
                CommandInput {
                    console,
                    theme,
                    focused: app_state.focus == Focus::Input,
                },
                areas.input,
            );
            f.render_widget(SubmitButton { console, theme }, areas.submit);
            f.render_widget(
                OutputPane {
                    console,
                    theme,
                    spinner: &app_state.spinner,
                    frame: app_state.frame_count,
                    focused: app_state.focus == Focus::Output,
                },
                areas.output,
            );
            if areas.suggestions.width > 0 {
                let mut list_state = console.suggestion_state.clone();
                f.render_stateful_widget(
                    SuggestionList {
                        suggestions: &console.suggestions,
                        theme,
                        focused: app_state.focus == Focus::Suggestions,
                    },
                    areas.suggestions,
                    &mut list_state,
                );
                console.suggestion_state = list_state;
            }
        }
        PageState::Numbers(numbers) => {
            f.render_stateful_widget(
                NumbersTable {
                    rows: &numbers.rows,
                    theme,
                },
                layout.body,
                &mut numbers.table_state,
            );
        }
        page => f.render_widget(
            PageView {
                page,
                path: &app_state.current_path,
                theme,
                spinner: &app_state.spinner,
            },
            layout.body,
        ),
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.footer,
    );
}
