use crate::domain::console::ConsoleFacade;
use crate::domain::models::{CommandText, ResponseText};
use crate::error::SubmitError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Disabled/enabled state of one submit control.
///
/// Cloning shares the state: the UI keeps one handle to render the control,
/// the runtime keeps another to start submissions.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    in_flight: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Flips the control to in flight. Returns `None` when it already is.
    pub fn try_acquire(&self) -> Option<InFlight> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                flag: self.in_flight.clone(),
            })
    }
}

/// Held for the duration of one submission. Dropping it re-enables the
/// control, whichever way the submission ended.
#[derive(Debug)]
#[must_use = "dropping the guard immediately re-enables the control"]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitterOptions {
    /// Show a progress indicator and hide the output while in flight.
    pub show_progress: bool,
}

impl Default for SubmitterOptions {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

/// Sends console commands to the server, one at a time per control.
#[derive(Clone)]
pub struct CommandSubmitter {
    facade: Arc<dyn ConsoleFacade>,
    control: SubmitControl,
    options: SubmitterOptions,
}

impl CommandSubmitter {
    pub fn new(
        facade: Arc<dyn ConsoleFacade>,
        control: SubmitControl,
        options: SubmitterOptions,
    ) -> Self {
        Self {
            facade,
            control,
            options,
        }
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn options(&self) -> SubmitterOptions {
        self.options
    }

    pub fn begin(&self) -> Result<InFlight, SubmitError> {
        self.control.try_acquire().ok_or(SubmitError::Busy)
    }

    pub async fn submit(&self, command: &CommandText) -> Result<ResponseText, SubmitError> {
        let guard = self.begin()?;
        self.submit_with(guard, command).await
    }

    /// Runs a submission whose control was already acquired. The guard is
    /// released before this returns.
    pub async fn submit_with(
        &self,
        guard: InFlight,
        command: &CommandText,
    ) -> Result<ResponseText, SubmitError> {
        let _guard = guard;
        let started = Instant::now();
        tracing::debug!(command = %command, "submitting command");

        match self.facade.raw(command).await {
            Ok(response) => {
                tracing::info!(
                    command = %command,
                    bytes = response.0.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "command answered"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "command submission failed");
                Err(e.into())
            }
        }
    }
}
