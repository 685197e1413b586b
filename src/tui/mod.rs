//! Terminal UI: a synchronous event loop over a single game session.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, instrument};

use crate::game::SortOrder;
use app::{App, Transition};
use ui::Hotspots;

/// Restores the terminal on drop, so panics and early returns leave the
/// shell usable.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

/// Runs the game UI until the player quits.
#[instrument]
pub fn run(order: SortOrder) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let _guard = TerminalGuard;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to initialize the terminal")?;

    info!("starting game session");
    let mut app = App::new(order);

    loop {
        let mut hotspots = Hotspots::default();
        terminal.draw(|frame| hotspots = ui::draw(frame, &app))?;
        app.set_hotspots(hotspots);

        // Block until the next input. Every state change is driven by the
        // player, so there is nothing to redraw between events.
        let transition = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => Transition::Stay,
        };
        if transition == Transition::Quit {
            break;
        }
    }

    info!("session closed");
    Ok(())
}
