use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use textabus_console::app::{r#loop::run_loop, state::AppState};
use textabus_console::config::{Cli, Settings};
use textabus_console::infrastructure::http_adapter::HttpAdapter;
use textabus_console::logging;
use textabus_console::theme::Theme;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    logging::init(&settings.log_file, settings.log_filter.as_deref())?;

    // Bad URLs and config fail here, before the terminal enters raw mode
    let adapter = Arc::new(HttpAdapter::new(&settings.base_url, settings.http.clone())?);
    tracing::info!(url = %settings.base_url, page = %settings.start_page, "starting console");

    let app_state = AppState::new(
        settings.submitter,
        settings.suggestions.clone(),
        &settings.start_page,
        Theme::from_palette_type(settings.palette),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, adapter).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "console exited with an error");
        println!("{:?}", err);
    }

    Ok(())
}
