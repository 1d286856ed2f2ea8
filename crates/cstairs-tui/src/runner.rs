//! Main TUI runner - entry point and event loop
//!
//! The loop is synchronous and cooperative: draw the current state, poll
//! the terminal for up to 50ms, feed the resulting message (and any
//! follow-ups) through the update function, repeat.

use std::io;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use cstairs_app::{handler, AppState, Settings};
use cstairs_core::levels::WIDGET_DESCRIPTION;
use cstairs_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
pub fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal; hover needs mouse events reported
    let mut term = ratatui::init();
    if let Err(e) = crossterm::execute!(io::stdout(), EnableMouseCapture) {
        warn!("Mouse capture unavailable, keyboard navigation only: {}", e);
    }

    let size = term.size()?;
    let mut state = AppState::new(settings, size.width, size.height);

    // Accessibility surface: describe the diagram once at startup
    info!("{}", WIDGET_DESCRIPTION);
    info!(
        columns = size.width,
        rows = size.height,
        width_px = state.layout.width(),
        "control-stairs ready"
    );

    let result = run_loop(&mut term, &mut state);

    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events, chasing any follow-up messages
        if let Some(message) = event::poll()? {
            let mut next = Some(message);
            while let Some(message) = next {
                next = handler::update(state, message).message;
            }
        }
    }

    Ok(())
}
