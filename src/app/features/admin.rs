use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity, ErrorState, Focus, PageState},
};
use crate::domain::models::Approval;

use super::navigation::reload;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext | Action::SelectPrev | Action::SelectIndex(_)
            if state.focus == Focus::Table =>
        {
            if let PageState::Numbers(numbers) = &mut state.page {
                let len = numbers.rows.len();
                if len > 0 {
                    let current = numbers.table_state.selected().unwrap_or(0);
                    let next = match action {
                        Action::SelectNext => (current + 1).min(len - 1),
                        Action::SelectPrev => current.saturating_sub(1),
                        Action::SelectIndex(i) => (*i).min(len - 1),
                        _ => current,
                    };
                    numbers.table_state.select(Some(next));
                }
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleApproval(idx) => {
            let PageState::Numbers(numbers) = &state.page else {
                return UpdateResult::Handled(None);
            };
            let Some(row) = numbers.rows.get(*idx) else {
                return UpdateResult::Handled(None);
            };
            let approval = Approval::toggle_for(row);
            let id = row.id.clone();
            let label = row.action_label();
            state.set_status(format!("{label} {id}…"));
            UpdateResult::Handled(Some(Command::SetApproval {
                path: state.current_path.clone(),
                id,
                approval,
            }))
        }
        Action::ApprovalSettled(result) => {
            match result {
                Ok(message) => state.set_status(message.clone()),
                Err(message) => {
                    state.last_error = Some(ErrorState::new(
                        ErrorSeverity::Error,
                        format!("Approval update failed: {message}"),
                    ));
                }
            }
            // Settled either way: reload the page like a browser would
            UpdateResult::Handled(Some(reload(state)))
        }
        _ => UpdateResult::NotHandled,
    }
}
