//! Game domain: grid types, rules, and the history-keeping session.

pub mod invariants;
pub mod position;
pub mod rules;
pub mod session;
pub mod types;

pub use position::Position;
pub use rules::{LINES, Win, check_winner, is_draw, is_full};
pub use session::{ClickOutcome, GameSession, GameStatus, SortOrder};
pub use types::{Board, Player, Square};
