//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe with a browsable move history
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal, with time travel through the move history")]
#[command(version)]
pub struct Cli {
    /// Write diagnostic logs to this file. The TUI owns the terminal, so
    /// logging stays off unless a file is given. Honors RUST_LOG.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Start with the move list sorted newest first
    #[arg(long)]
    pub descending: bool,
}
