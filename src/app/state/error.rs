use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
}

impl ErrorState {
    pub fn new(severity: ErrorSeverity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
        }
    }
}
