use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Focus, PageState},
};
use crate::domain::navigation::{page_kind, PageKind};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            if state.console.is_in_flight() || state.page == PageState::Loading {
                state.advance_spinner();
            }
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::FocusInput => {
            if page_kind(&state.current_path) == PageKind::Console {
                state.focus = Focus::Input;
            }
            UpdateResult::Handled(None)
        }
        Action::FocusNext | Action::FocusPrev => {
            let order = focus_order(&state.current_path);
            let current = order.iter().position(|f| *f == state.focus).unwrap_or(0);
            let len = order.len();
            let next = if *action == Action::FocusNext {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            };
            state.focus = order[next];
            if state.focus == Focus::Suggestions
                && state.console.suggestion_state.selected().is_none()
                && !state.console.suggestions.is_empty()
            {
                state.console.suggestion_state.select(Some(0));
            }
            UpdateResult::Handled(None)
        }
        Action::ScrollDown(n) => {
            scroll(state, i32::from(*n));
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(n) => {
            scroll(state, -i32::from(*n));
            UpdateResult::Handled(None)
        }
        Action::SelectNext if matches!(state.focus, Focus::Output | Focus::Page) => {
            scroll(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrev if matches!(state.focus, Focus::Output | Focus::Page) => {
            scroll(state, -1);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn focus_order(path: &str) -> &'static [Focus] {
    match page_kind(path) {
        PageKind::Console => &[Focus::Input, Focus::Suggestions, Focus::Output],
        PageKind::Numbers => &[Focus::Table],
        PageKind::Text => &[Focus::Page],
    }
}

fn scroll(state: &mut AppState, delta: i32) {
    let apply = |value: u16, max: usize| -> u16 {
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let next = (i32::from(value) + delta).clamp(0, i32::from(max));
        next as u16
    };

    match state.focus {
        Focus::Page => {
            if let PageState::Text { body, scroll, .. } = &mut state.page {
                *scroll = apply(*scroll, body.lines().count().saturating_sub(1));
            }
        }
        _ => {
            let lines = state
                .console
                .output
                .as_ref()
                .map_or(0, |o| o.as_str().lines().count());
            state.console.output_scroll =
                apply(state.console.output_scroll, lines.saturating_sub(1));
        }
    }
}
