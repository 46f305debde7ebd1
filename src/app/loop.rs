use crate::app::{
    action::Action, command::Command, features, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::console::ConsoleFacade;
use crate::domain::submission::CommandSubmitter;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(120);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    facade: Arc<dyn ConsoleFacade>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, facade, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    facade: Arc<dyn ConsoleFacade>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // The submitter shares the control the UI renders
    let submitter = CommandSubmitter::new(
        facade.clone(),
        app_state.console.control.clone(),
        app_state.console.options,
    );
    app_state.base_url = facade.base_url();

    // Initial Load
    let start = app_state.current_path.clone();
    if let Some(cmd) = reducer::update(&mut app_state, Action::Navigate(start)) {
        handle_command(cmd, &submitter, facade.clone(), action_tx.clone())?;
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if action != Action::Tick {
                tracing::trace!(?action, "dispatch");
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &submitter, facade.clone(), action_tx.clone())?;
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    submitter: &CommandSubmitter,
    facade: Arc<dyn ConsoleFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    features::handler::handle_command(command, submitter, facade, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
