//! Noughts - tic-tac-toe for the terminal.
//!
//! Parses the CLI, wires up file-based logging, and hands control to the
//! terminal UI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts::SortOrder;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let order = if cli.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    info!(order = order.label(), "starting noughts");

    noughts::tui::run(order)
}

/// Sends logs to a file so they never fight the TUI for the terminal.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
