//! Framework-free view models derived from game state.
//!
//! Everything here is plain data: no widgets, no callbacks, no terminal
//! types. The TUI renders these models, and tests assert on them directly.

pub mod board;
pub mod moves;

pub use board::{CellView, board_view};
pub use moves::{MoveEntry, changed_cell, move_list};
