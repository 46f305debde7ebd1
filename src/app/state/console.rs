use super::input::AppTextArea;
use crate::domain::models::{CommandText, ResponseText};
use crate::domain::submission::{SubmitControl, SubmitterOptions};
use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

/// Example commands shown when the home page offers none. Mirrors the
/// server's help message.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "10619",
    "10619 75 47",
    "times 10619",
    "stops union station",
    "settings clock",
];

pub const SUBMIT_LABEL: &str = "Send";
pub const SUBMIT_BUSY_LABEL: &str = "…";

#[derive(Debug, Clone)]
pub struct ConsoleState<'a> {
    pub input: AppTextArea<'a>,
    pub control: SubmitControl,
    pub options: SubmitterOptions,
    pub output: Option<ResponseText>,
    pub output_scroll: u16,
    /// The command `output` answers.
    pub last_command: Option<CommandText>,
    pub answered_at: Option<DateTime<Local>>,
    pub suggestions: Vec<String>,
    pub suggestion_state: ListState,
}

impl ConsoleState<'_> {
    pub fn new(options: SubmitterOptions, suggestions: Vec<String>) -> Self {
        Self {
            input: AppTextArea::default(),
            control: SubmitControl::new(),
            options,
            output: None,
            output_scroll: 0,
            last_command: None,
            answered_at: None,
            suggestions,
            suggestion_state: ListState::default(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.control.is_disabled()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_in_flight() {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Whether the progress indicator replaces the output right now.
    pub fn shows_progress(&self) -> bool {
        self.options.show_progress && self.is_in_flight()
    }
}

impl Default for ConsoleState<'_> {
    fn default() -> Self {
        Self::new(
            SubmitterOptions::default(),
            DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_progress_follow_control() {
        let console = ConsoleState::default();
        assert_eq!(console.submit_label(), SUBMIT_LABEL);
        assert!(!console.shows_progress());

        let guard = console.control.try_acquire().unwrap();
        assert_eq!(console.submit_label(), SUBMIT_BUSY_LABEL);
        assert!(console.shows_progress());

        drop(guard);
        assert_eq!(console.submit_label(), SUBMIT_LABEL);
        assert!(!console.shows_progress());
    }

    #[test]
    fn test_progress_disabled_by_option() {
        let console = ConsoleState::new(
            SubmitterOptions {
                show_progress: false,
            },
            Vec::new(),
        );
        let _guard = console.control.try_acquire().unwrap();
        assert!(console.is_in_flight());
        assert!(!console.shows_progress());
    }
}
