//! Draw detection: a full grid with no completed triplet.

use tracing::instrument;

use super::win::check_winner;
use crate::game::types::{Board, Square};

/// True when every square is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| *square != Square::Empty)
}

/// True when the grid is full and nobody completed a triplet.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
