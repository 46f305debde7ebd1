use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: &[Feature] = &[
    features::navigation::update,
    features::console::update,
    features::admin::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Focus, NumbersState, PageState};
    use crate::domain::models::{
        Approval, CommandText, NumberId, NumberRow, PageContent, ResponseText,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    fn submitted(command: Option<Command>) -> CommandText {
        match command {
            Some(Command::Submit(text, _guard)) => text,
            other => panic!("expected a submission, got {other:?}"),
        }
    }

    fn numbers_state() -> AppState<'static> {
        let mut state = AppState {
            current_path: "/admin/numbers".to_string(),
            focus: Focus::Table,
            ..AppState::default()
        };
        state.page = PageState::Numbers(NumbersState::new(vec![
            NumberRow {
                id: NumberId("42".to_string()),
                name: Some("Alice".to_string()),
                approved: false,
            },
            NumberRow {
                id: NumberId("7".to_string()),
                name: None,
                approved: true,
            },
        ]));
        state
    }

    #[test]
    fn test_submit_typed_command() {
        let mut state = AppState::default();
        type_text(&mut state, "2 + 2");

        let cmd = update(&mut state, Action::SubmitInput);
        assert!(state.console.control.is_disabled());
        assert_eq!(submitted(cmd), CommandText::from("2 + 2"));
        // Nothing is credited to the command until it is answered
        assert_eq!(state.console.last_command, None);
        assert!(state.console.input.is_selecting());
    }

    #[test]
    fn test_empty_command_still_submits() {
        let mut state = AppState::default();
        let cmd = update(&mut state, Action::SubmitInput);
        assert_eq!(submitted(cmd), CommandText::default());
    }

    #[test]
    fn test_submit_refused_while_in_flight() {
        let mut state = AppState::default();
        let first = update(&mut state, Action::SubmitCommand(CommandText::from("a")));
        assert!(first.is_some());

        let second = update(&mut state, Action::SubmitCommand(CommandText::from("b")));
        assert!(second.is_none());
        assert!(state.console.control.is_disabled());

        // Dropping the first command's guard re-enables the control
        drop(first);
        assert!(!state.console.control.is_disabled());
        assert!(update(&mut state, Action::SubmitCommand(CommandText::from("b"))).is_some());
    }

    #[test]
    fn test_suggestion_matches_manual_submission() {
        let mut typed = AppState::default();
        type_text(&mut typed, "stops union station");
        let manual = submitted(update(&mut typed, Action::SubmitInput));

        let mut clicked = AppState::default();
        let idx = clicked
            .console
            .suggestions
            .iter()
            .position(|s| s == "stops union station")
            .unwrap();
        let activated = submitted(update(&mut clicked, Action::ActivateSuggestion(idx)));

        assert_eq!(manual, activated);
        assert_eq!(clicked.console.input.text(), "stops union station");
        assert_eq!(clicked.console.suggestion_state.selected(), Some(idx));
    }

    #[test]
    fn test_unknown_suggestion_does_nothing() {
        let mut state = AppState::default();
        assert!(update(&mut state, Action::ActivateSuggestion(999)).is_none());
        assert!(!state.console.control.is_disabled());
    }

    #[test]
    fn test_response_rendered_verbatim() {
        let mut state = AppState::default();
        let body = "  10619 Westbound\n  75 12:04\n\n";
        update(
            &mut state,
            Action::SubmissionSettled(CommandText::from("10619"), Ok(ResponseText(body.to_string()))),
        );
        assert_eq!(state.console.output.as_ref().unwrap().as_str(), body);
        assert!(state.console.answered_at.is_some());

        // Same response twice renders the same value
        update(
            &mut state,
            Action::SubmissionSettled(CommandText::from("10619"), Ok(ResponseText(body.to_string()))),
        );
        assert_eq!(state.console.output.as_ref().unwrap().as_str(), body);
    }

    #[test]
    fn test_failed_submission_keeps_output_and_reports() {
        let mut state = AppState::default();
        state.console.output = Some(ResponseText("previous".to_string()));
        update(
            &mut state,
            Action::SubmissionSettled(
                CommandText::from("10619"),
                Err("connection refused".to_string()),
            ),
        );
        assert_eq!(state.console.output.as_ref().unwrap().as_str(), "previous");
        assert!(state
            .last_error
            .as_ref()
            .unwrap()
            .message
            .contains("connection refused"));

        update(&mut state, Action::DismissError);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_output_stays_credited_to_answered_command() {
        let mut state = AppState {
            page: PageState::Console,
            ..AppState::default()
        };
        let first = submitted(update(&mut state, Action::SubmitCommand(CommandText::from("10619"))));
        update(
            &mut state,
            Action::SubmissionSettled(first, Ok(ResponseText("times for 10619".to_string()))),
        );
        let answered_at = state.console.answered_at;

        let second = submitted(update(
            &mut state,
            Action::SubmitCommand(CommandText::from("stops main")),
        ));
        // In flight: still the previous answer and its command
        assert_eq!(state.console.last_command, Some(CommandText::from("10619")));
        update(
            &mut state,
            Action::SubmissionSettled(second, Err("connection refused".to_string())),
        );

        assert_eq!(state.console.last_command, Some(CommandText::from("10619")));
        assert_eq!(state.console.answered_at, answered_at);
        assert_eq!(
            state.console.output.as_ref().unwrap().as_str(),
            "times for 10619"
        );

        let area = ratatui::layout::Rect::new(0, 0, 60, 8);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        ratatui::widgets::Widget::render(
            crate::components::console::OutputPane {
                console: &state.console,
                theme: &state.theme,
                spinner: &state.spinner,
                frame: 0,
                focused: false,
            },
            area,
            &mut buf,
        );
        let screen: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("> 10619"));
        assert!(!screen.contains("stops main"));
    }

    #[test]
    fn test_enter_while_busy_keeps_field_unselected() {
        let mut state = AppState::default();
        let first = update(&mut state, Action::SubmitCommand(CommandText::from("10619")));
        assert!(first.is_some());

        type_text(&mut state, "times 10619");
        assert!(update(&mut state, Action::SubmitInput).is_none());
        assert!(!state.console.input.is_selecting());

        // The next keystroke extends the text instead of replacing it
        type_text(&mut state, "!");
        assert_eq!(state.console.input.text(), "times 10619!");
    }

    #[test]
    fn test_navigate_loads_page_and_moves_focus() {
        let mut state = AppState::default();
        let cmd = update(&mut state, Action::Navigate("/admin/numbers".to_string()));
        assert!(matches!(cmd, Some(Command::LoadPage(ref p)) if p == "/admin/numbers"));
        assert_eq!(state.page, PageState::Loading);
        assert_eq!(state.focus, Focus::Table);

        let cmd = update(&mut state, Action::NavigateNext);
        assert!(matches!(cmd, Some(Command::LoadPage(ref p)) if p == "/"));
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_stale_page_is_ignored() {
        let mut state = AppState {
            current_path: "/about".to_string(),
            ..AppState::default()
        };
        update(
            &mut state,
            Action::PageLoaded(
                "/changelog".to_string(),
                PageContent::Text {
                    title: None,
                    body: "old".to_string(),
                },
            ),
        );
        assert_eq!(state.page, PageState::Loading);
    }

    #[test]
    fn test_home_page_replaces_suggestions() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::PageLoaded(
                "/".to_string(),
                PageContent::Console {
                    suggestions: vec!["12345".to_string()],
                },
            ),
        );
        assert_eq!(state.page, PageState::Console);
        assert_eq!(state.console.suggestions, vec!["12345".to_string()]);
    }

    #[test]
    fn test_home_page_failure_keeps_console_usable() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::PageFailed("/".to_string(), "refused".to_string()),
        );
        assert_eq!(state.page, PageState::Console);
        assert!(!state.console.suggestions.is_empty());
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_approve_row_requests_post_for_id() {
        let mut state = numbers_state();
        let cmd = update(&mut state, Action::ToggleApproval(0));
        match cmd {
            Some(Command::SetApproval { path, id, approval }) => {
                assert_eq!(path, "/admin/numbers");
                assert_eq!(id, NumberId("42".to_string()));
                assert_eq!(approval, Approval::Approve);
            }
            other => panic!("expected SetApproval, got {other:?}"),
        }

        let cmd = update(&mut state, Action::ToggleApproval(1));
        assert!(matches!(
            cmd,
            Some(Command::SetApproval {
                approval: Approval::Unapprove,
                ..
            })
        ));
    }

    #[test]
    fn test_settled_approval_reloads_page() {
        for result in [Ok("Approved 42".to_string()), Err("boom".to_string())] {
            let mut state = numbers_state();
            update(&mut state, Action::SelectNext);
            let cmd = update(&mut state, Action::ApprovalSettled(result));
            assert!(matches!(cmd, Some(Command::LoadPage(ref p)) if p == "/admin/numbers"));
            assert_eq!(state.page, PageState::Loading);
        }
    }

    #[test]
    fn test_table_selection_is_clamped() {
        let mut state = numbers_state();
        update(&mut state, Action::SelectNext);
        update(&mut state, Action::SelectNext);
        match &state.page {
            PageState::Numbers(n) => assert_eq!(n.selected(), Some(1)),
            other => panic!("unexpected page {other:?}"),
        }
        update(&mut state, Action::SelectPrev);
        update(&mut state, Action::SelectPrev);
        match &state.page {
            PageState::Numbers(n) => assert_eq!(n.selected(), Some(0)),
            other => panic!("unexpected page {other:?}"),
        }
    }

    #[test]
    fn test_focus_moves_between_input_and_suggestions() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectNext);
        assert_eq!(state.focus, Focus::Suggestions);
        assert_eq!(state.console.suggestion_state.selected(), Some(0));

        update(&mut state, Action::SelectPrev);
        assert_eq!(state.focus, Focus::Input);

        update(&mut state, Action::FocusPrev);
        assert_eq!(state.focus, Focus::Output);
        update(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_typing_ignored_outside_input() {
        let mut state = AppState {
            focus: Focus::Suggestions,
            ..AppState::default()
        };
        type_text(&mut state, "abc");
        assert_eq!(state.console.input.text(), "");
    }
}
