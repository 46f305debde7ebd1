use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity, ErrorState, Focus, NumbersState, PageState},
};
use crate::domain::models::PageContent;
use crate::domain::navigation::{cycle, page_kind, PageKind, NAV_LINKS};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Navigate(path) => UpdateResult::Handled(Some(navigate(state, path))),
        Action::NavigateNext | Action::NavigatePrev => {
            let offset = if *action == Action::NavigateNext { 1 } else { -1 };
            match cycle(NAV_LINKS, &state.current_path, offset) {
                Some(link) => UpdateResult::Handled(Some(navigate(state, link.path))),
                None => UpdateResult::Handled(None),
            }
        }
        Action::Reload => UpdateResult::Handled(Some(reload(state))),
        Action::PageLoaded(path, content) => {
            if *path != state.current_path {
                tracing::debug!(%path, "dropping stale page");
                return UpdateResult::Handled(None);
            }
            state.page = match content {
                PageContent::Console { suggestions } => {
                    if !suggestions.is_empty() && *suggestions != state.console.suggestions {
                        state.console.suggestions = suggestions.clone();
                        state.console.suggestion_state.select(None);
                    }
                    PageState::Console
                }
                PageContent::Numbers { rows } => PageState::Numbers(NumbersState::new(rows.clone())),
                PageContent::Text { title, body } => PageState::Text {
                    title: title.clone(),
                    body: body.clone(),
                    scroll: 0,
                },
            };
            UpdateResult::Handled(None)
        }
        Action::PageFailed(path, message) => {
            if *path != state.current_path {
                return UpdateResult::Handled(None);
            }
            // The console works without its page; only the examples are missing
            if page_kind(path) == PageKind::Console {
                state.page = PageState::Console;
                state.last_error = Some(ErrorState::new(
                    ErrorSeverity::Warning,
                    format!("Could not load {path}: {message}"),
                ));
            } else {
                state.page = PageState::Failed(message.clone());
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn navigate(state: &mut AppState, path: &str) -> Command {
    state.current_path = path.to_string();
    state.focus = default_focus(path);
    reload(state)
}

/// Full reload: everything the page held is thrown away and fetched again.
pub(crate) fn reload(state: &mut AppState) -> Command {
    state.page = PageState::Loading;
    Command::LoadPage(state.current_path.clone())
}

pub fn default_focus(path: &str) -> Focus {
    match page_kind(path) {
        PageKind::Console => Focus::Input,
        PageKind::Numbers => Focus::Table,
        PageKind::Text => Focus::Page,
    }
}
