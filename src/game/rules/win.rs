//! Win detection: first completed triplet in a fixed scan order.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::game::position::Position;
use crate::game::types::{Board, Player, Square};

/// The eight winning triplets, scanned in order: rows, then columns, then
/// diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A decided win: who won, and along which triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player holding the completed triplet.
    pub player: Player,
    /// The completed triplet, for highlighting.
    pub line: [Position; 3],
}

/// Finds the first completed triplet on the board.
///
/// Scans [`LINES`] in order and returns the mark and triplet of the first
/// line whose three squares hold the same player's mark.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(Win { player, line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (position, player)| {
                board.place(*position, *player)
            })
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_top_row_wins() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line, LINES[0]);
    }

    #[test]
    fn test_left_column_wins() {
        let board = board_of(&[
            (Position::TopLeft, Player::O),
            (Position::MiddleLeft, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::X),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, LINES[3]);
    }

    #[test]
    fn test_anti_diagonal_wins() {
        let board = board_of(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopLeft, Player::O),
            (Position::TopCenter, Player::O),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.line, LINES[7]);
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        // X holds both the top row and the left column; the row comes first.
        let board = board_of(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.line, LINES[0]);
    }
}
