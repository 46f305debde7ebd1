use crate::app::{
    action::Action,
    state::{AppState, Focus, PageState},
    ui,
};
use crate::components::{header, numbers::ACTION_COLUMN_WIDTH};
use crate::domain::navigation::NAV_LINKS;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // --- Global ---
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('r') if ctrl => return Some(Action::Reload),
        KeyCode::Right if ctrl => return Some(Action::NavigateNext),
        KeyCode::Left if ctrl => return Some(Action::NavigatePrev),
        KeyCode::F(n @ 1..=5) => {
            return NAV_LINKS
                .get(usize::from(n - 1))
                .map(|link| Action::Navigate(link.path.to_string()));
        }
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Esc => {
            return if app_state.last_error.is_some() {
                Some(Action::DismissError)
            } else {
                Some(Action::FocusInput)
            };
        }
        KeyCode::PageDown => return Some(Action::ScrollDown(10)),
        KeyCode::PageUp => return Some(Action::ScrollUp(10)),
        _ => {}
    }

    match app_state.focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Up => None,
            _ => Some(Action::TextAreaInput(key)),
        },
        focus => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
            KeyCode::Char('[') => Some(Action::NavigatePrev),
            KeyCode::Char(']') => Some(Action::NavigateNext),
            KeyCode::Char('i') | KeyCode::Char('/') if focus != Focus::Table => {
                Some(Action::FocusInput)
            }
            KeyCode::Enter | KeyCode::Char(' ') => activate(app_state),
            KeyCode::Char('a') if focus == Focus::Table => activate(app_state),
            _ => None,
        },
    }
}

fn activate(app_state: &AppState<'_>) -> Option<Action> {
    match (&app_state.page, app_state.focus) {
        (PageState::Console, Focus::Suggestions) => app_state
            .console
            .suggestion_state
            .selected()
            .map(Action::ActivateSuggestion),
        (PageState::Numbers(numbers), Focus::Table) => {
            numbers.selected().map(Action::ToggleApproval)
        }
        _ => None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            return Some(match app_state.page {
                PageState::Numbers(_) => Action::SelectNext,
                _ => Action::ScrollDown(3),
            });
        }
        MouseEventKind::ScrollUp => {
            return Some(match app_state.page {
                PageState::Numbers(_) => Action::SelectPrev,
                _ => Action::ScrollUp(3),
            });
        }
        MouseEventKind::Down(MouseButton::Left) => {}
        _ => return None,
    }

    if contains(layout.header, column, row) {
        return header::tab_at(layout.header, &app_state.current_path, column)
            .and_then(|idx| NAV_LINKS.get(idx))
            .map(|link| Action::Navigate(link.path.to_string()));
    }

    if !contains(layout.body, column, row) {
        return None;
    }

    match &app_state.page {
        PageState::Console => {
            let console = &app_state.console;
            let areas = ui::console_layout(layout.body, !console.suggestions.is_empty());
            if contains(areas.submit, column, row) {
                return Some(Action::SubmitInput);
            }
            if contains(areas.input, column, row) {
                return Some(Action::FocusInput);
            }
            if contains(areas.suggestions, column, row) {
                // Skip the top border
                let first = areas.suggestions.y + 1;
                let idx = row.checked_sub(first)? as usize + console.suggestion_state.offset();
                let inner_bottom = areas.suggestions.bottom().saturating_sub(1);
                if row < inner_bottom && idx < console.suggestions.len() {
                    return Some(Action::ActivateSuggestion(idx));
                }
            }
            None
        }
        PageState::Numbers(numbers) => {
            // Border plus the header row
            let first = layout.body.y + 2;
            let idx = row.checked_sub(first)? as usize + numbers.table_state.offset();
            if idx >= numbers.rows.len() {
                return None;
            }
            let action_start = layout
                .body
                .right()
                .saturating_sub(1 + ACTION_COLUMN_WIDTH);
            if column >= action_start {
                Some(Action::ToggleApproval(idx))
            } else {
                Some(Action::SelectIndex(idx))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NumbersState;
    use crate::domain::models::{NumberId, NumberRow};

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_enter_in_field_submits() {
        let state = AppState {
            page: PageState::Console,
            ..AppState::default()
        };
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::SubmitInput)
        );
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
    }

    #[test]
    fn test_enter_on_suggestion_activates_it() {
        let mut state = AppState {
            page: PageState::Console,
            focus: Focus::Suggestions,
            ..AppState::default()
        };
        state.console.suggestion_state.select(Some(2));
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ActivateSuggestion(2))
        );
    }

    #[test]
    fn test_click_on_suggestion_activates_it() {
        let state = AppState {
            page: PageState::Console,
            ..AppState::default()
        };
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let areas = ui::console_layout(layout.body, true);
        let event = click(areas.suggestions.x + 3, areas.suggestions.y + 2);
        assert_eq!(
            map_event_to_action(event, &state, SIZE),
            Some(Action::ActivateSuggestion(1))
        );
    }

    #[test]
    fn test_click_on_submit_control() {
        let state = AppState {
            page: PageState::Console,
            ..AppState::default()
        };
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height));
        let areas = ui::console_layout(layout.body, true);
        let event = click(areas.submit.x + 2, areas.submit.y + 1);
        assert_eq!(
            map_event_to_action(event, &state, SIZE),
            Some(Action::SubmitInput)
        );
    }

    #[test]
    fn test_click_on_tab_navigates() {
        let state = AppState::default();
        let (start, _) = header::tab_ranges("/")[1];
        assert_eq!(
            map_event_to_action(click(start + 1, 0), &state, SIZE),
            Some(Action::Navigate("/about".to_string()))
        );
    }

    #[test]
    fn test_table_keys_and_clicks() {
        let state = AppState {
            current_path: "/admin/numbers".to_string(),
            focus: Focus::Table,
            page: PageState::Numbers(NumbersState::new(vec![NumberRow {
                id: NumberId("42".to_string()),
                name: None,
                approved: false,
            }])),
            ..AppState::default()
        };
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ToggleApproval(0))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::Quit)
        );
        // Body starts on row 1; border and header take two more
        assert_eq!(
            map_event_to_action(click(5, 3), &state, SIZE),
            Some(Action::SelectIndex(0))
        );
        assert_eq!(
            map_event_to_action(click(SIZE.width - 4, 3), &state, SIZE),
            Some(Action::ToggleApproval(0))
        );
        assert_eq!(map_event_to_action(click(5, 4), &state, SIZE), None);
    }

    #[test]
    fn test_escape_dismisses_error_first() {
        let mut state = AppState {
            focus: Focus::Output,
            ..AppState::default()
        };
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::FocusInput)
        );
        state.last_error = Some(crate::app::state::ErrorState::new(
            crate::app::state::ErrorSeverity::Error,
            "boom",
        ));
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::DismissError)
        );
    }
}
