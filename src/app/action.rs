use crate::app::command::Command;
use crate::domain::models::{CommandText, PageContent, ResponseText};
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Navigation (header tabs) ---
    Navigate(String),
    NavigateNext,
    NavigatePrev,
    Reload,

    // --- Focus & Selection ---
    FocusNext,
    FocusPrev,
    FocusInput,
    SelectNext,
    SelectPrev,
    SelectIndex(usize),
    ScrollUp(u16),
    ScrollDown(u16),
    DismissError,

    // --- Console ---
    TextAreaInput(KeyEvent),
    SubmitInput,                   // Enter in the command field / the submit control
    SubmitCommand(CommandText),    // Starts a submission if the control is idle
    ActivateSuggestion(usize),     // Copy suggestion into the field, then submit

    // --- Admin ---
    ToggleApproval(usize),         // Approve/unapprove the row at index

    // --- Async Results ("Callback") ---
    PageLoaded(String, PageContent),
    PageFailed(String, String),
    SubmissionSettled(CommandText, Result<ResponseText, String>), // Command with its outcome
    ApprovalSettled(Result<String, String>),
}
