use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity, ErrorState, Focus},
};
use crate::domain::models::CommandText;
use chrono::Local;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            if state.focus == Focus::Input {
                state.console.input.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitInput => {
            let command = CommandText(state.console.input.text());
            let started = submit(state, command);
            if started.is_some() {
                // Typing right after a submission replaces the old command
                state.console.input.select_all();
            }
            UpdateResult::Handled(started)
        }
        Action::SubmitCommand(command) => UpdateResult::Handled(submit(state, command.clone())),
        Action::ActivateSuggestion(idx) => {
            let Some(text) = state.console.suggestions.get(*idx).cloned() else {
                return UpdateResult::Handled(None);
            };
            state.console.suggestion_state.select(Some(*idx));
            state.console.input.set_text(&text);
            UpdateResult::Handled(submit(state, CommandText(text)))
        }
        Action::SubmissionSettled(command, Ok(response)) => {
            state.console.output = Some(response.clone());
            state.console.last_command = Some(command.clone());
            state.console.output_scroll = 0;
            state.console.answered_at = Some(Local::now());
            UpdateResult::Handled(None)
        }
        Action::SubmissionSettled(command, Err(message)) => {
            state.last_error = Some(ErrorState::new(
                ErrorSeverity::Error,
                format!("Command `{command}` failed: {message}"),
            ));
            UpdateResult::Handled(None)
        }
        Action::SelectNext if state.focus == Focus::Input => {
            if !state.console.suggestions.is_empty() {
                state.focus = Focus::Suggestions;
                if state.console.suggestion_state.selected().is_none() {
                    state.console.suggestion_state.select(Some(0));
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SelectNext if state.focus == Focus::Suggestions => {
            let len = state.console.suggestions.len();
            if len > 0 {
                let next = state
                    .console
                    .suggestion_state
                    .selected()
                    .map_or(0, |i| (i + 1).min(len - 1));
                state.console.suggestion_state.select(Some(next));
            }
            UpdateResult::Handled(None)
        }
        Action::SelectPrev if state.focus == Focus::Suggestions => {
            match state.console.suggestion_state.selected() {
                Some(0) | None => state.focus = Focus::Input,
                Some(i) => state.console.suggestion_state.select(Some(i - 1)),
            }
            UpdateResult::Handled(None)
        }
        Action::SelectIndex(idx) if state.focus == Focus::Suggestions => {
            if *idx < state.console.suggestions.len() {
                state.console.suggestion_state.select(Some(*idx));
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Starts a submission unless one is already in flight for this control.
fn submit(state: &mut AppState, command: CommandText) -> Option<Command> {
    let Some(guard) = state.console.control.try_acquire() else {
        tracing::debug!(command = %command, "submit control disabled, ignoring");
        return None;
    };
    Some(Command::Submit(command, guard))
}
