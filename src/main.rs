// snaptodo entry point.
// Loads config, starts logging, and runs the TUI until the user quits.

mod app;
mod config;
mod error;
mod logging;
mod picker;
mod state;
mod todo;
mod ui;

use std::process::ExitCode;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::App;
use crate::config::{Config, config_path};
use crate::error::{Result, SnapError};

#[tokio::main]
async fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "snaptodo exited with an error");
            eprintln!("snaptodo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match config_path() {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let log_file = logging::init(&config.log_level)?;
    info!(log_file = ?log_file, picker = ?config.picker, "starting snaptodo");

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let picker = picker::from_config(&config.picker, events_tx.clone());
    let mut app = App::new(picker, events_tx, events_rx);

    let mut terminal =
        ratatui::try_init().map_err(|e| SnapError::TerminalSetup(e.to_string()))?;
    let result = app.run(&mut terminal);
    // Restore before any error is printed.
    ratatui::restore();

    info!(todos = app.todos.len(), "snaptodo exiting");
    result
}
