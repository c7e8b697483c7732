//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use neethi_app::config::Settings;
use neethi_app::{AppState, Engine};
use neethi_client::HttpLegalServices;
use neethi_core::prelude::*;

use super::{event, render, terminal};

/// Run the terminal UI against the backend at `api_base`
pub async fn run_tui(settings: Settings, api_base: &str) -> Result<()> {
    terminal::install_panic_hook();

    let services = HttpLegalServices::new(api_base)
        .map_err(|e| Error::config(format!("Invalid backend address: {}", e)))?;

    let mut state = AppState::with_settings(settings);
    state.api_base = api_base.to_string();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut engine = Engine::new(state, Arc::new(services));
    info!(api_base, "Neethi starting");
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop ended with error: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<HttpLegalServices>,
) -> Result<()> {
    while !engine.should_quit() {
        // Request completions and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
