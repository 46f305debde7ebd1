use crate::domain::navigation::HOME_PATH;
use crate::domain::submission::SubmitterOptions;
use crate::theme::Theme;
use std::time::Instant;

pub mod console;
pub mod error;
pub mod input;
pub mod page;

// Re-exports
pub use console::{ConsoleState, DEFAULT_SUGGESTIONS};
pub use error::{ErrorSeverity, ErrorState};
pub use input::AppTextArea;
pub use page::{NumbersState, PageState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Input,       // Typing into the command field
    Suggestions, // Moving through example commands
    Output,      // Scrolling the response
    Table,       // Admin numbers table
    Page,        // Scrolling a text page
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub base_url: String,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Navigation ---
    pub current_path: String,
    pub page: PageState,
    pub focus: Focus,

    // --- Console (kept across navigation) ---
    pub console: ConsoleState<'a>,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,

    // --- Config ---
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(
        options: SubmitterOptions,
        suggestions: Vec<String>,
        start_path: &str,
        theme: Theme,
    ) -> Self {
        Self {
            current_path: start_path.to_string(),
            console: ConsoleState::new(options, suggestions),
            theme,
            ..Self::default()
        }
    }

    pub fn advance_spinner(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let idx = (self.frame_count % SPINNER_FRAMES.len() as u64) as usize;
        self.spinner = SPINNER_FRAMES[idx].to_string();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + std::time::Duration::from_secs(4));
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            base_url: String::new(),
            last_error: None,
            status_message: None,
            status_clear_time: None,
            current_path: HOME_PATH.to_string(),
            page: PageState::Loading,
            focus: Focus::Input,
            console: ConsoleState::default(),
            frame_count: 0,
            spinner: SPINNER_FRAMES[0].to_string(),
            theme: Theme::default(),
        }
    }
}
