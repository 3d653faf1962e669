//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::panic;

use tracing::info;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::services::{ExpenseStore, RecordedFeedback};
use crate::storage::KeyValueStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_error(e: io::Error) -> TrackerError {
    TrackerError::Tui(e.to_string())
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> TrackerResult<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_error)?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(tui_error)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TrackerResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui<S: KeyValueStore>(
    store: ExpenseStore<S, RecordedFeedback>,
    settings: &Settings,
) -> TrackerResult<()> {
    let mut app = App::new(store, settings)?;

    let mut terminal = init_terminal()?;
    info!("tui started");

    let result = event_loop(&mut terminal, &mut app);

    // Restore even when the loop failed
    restore_terminal()?;
    info!("tui stopped");

    result
}

fn event_loop<S: KeyValueStore>(terminal: &mut Tui, app: &mut App<'_, S>) -> TrackerResult<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal
            .draw(|frame| super::views::render(frame, app))
            .map_err(tui_error)?;

        let bells = app.take_bells();
        if bells > 0 {
            let mut stdout = io::stdout();
            for _ in 0..bells {
                write!(stdout, "\x07").map_err(tui_error)?;
            }
            stdout.flush().map_err(tui_error)?;
        }

        let event = events
            .next()
            .map_err(|e| TrackerError::Tui(format!("event channel closed: {}", e)))?;
        handle_event(app, event)?;
    }

    Ok(())
}
