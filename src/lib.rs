//! Noughts library - tic-tac-toe with a time-travelling move history.
//!
//! The crate is split into three layers:
//!
//! - **Game**: the grid, the rules, and a [`GameSession`] that records every
//!   grid state and lets play resume from any recorded move
//! - **View**: framework-free view models for the board and the move list
//! - **TUI**: a ratatui front end over the view models
//!
//! # Example
//!
//! ```
//! use noughts::{ClickOutcome, GameSession, GameStatus, Position};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.click(Position::Center), ClickOutcome::Played);
//! assert_eq!(session.click(Position::Center), ClickOutcome::Occupied);
//! assert!(matches!(session.status(), GameStatus::InProgress { .. }));
//!
//! // Step back to the start; the move stays recorded.
//! session.jump_to(0);
//! assert_eq!(session.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod view;

pub mod tui;

// Crate-level exports - Board and rules
pub use game::{Board, LINES, Player, Position, Square, Win, check_winner, is_draw, is_full};

// Crate-level exports - Session
pub use game::{ClickOutcome, GameSession, GameStatus, SortOrder};

// Crate-level exports - Session invariants
pub use game::invariants::{
    CursorInBoundsInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SessionInvariants, SingleStepInvariant,
};

// Crate-level exports - View models
pub use view::{CellView, MoveEntry, board_view, changed_cell, move_list};
