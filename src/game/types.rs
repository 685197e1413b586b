//! Core board types: players, squares, and the 3x3 grid.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Player marks. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first mover.
    X,
    /// The second mover.
    O,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

impl Square {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// The 3x3 grid, stored row-major.
///
/// `Board` is a small `Copy` value. Transitions build new boards instead of
/// mutating in place, so a move history is just a vector of snapshots that
/// compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The square at `position`.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// True when the square at `position` holds no mark.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Square::Empty
    }

    /// Returns a new board with `player`'s mark at `position`.
    ///
    /// Does not check occupancy; callers guard that before placing.
    pub fn place(mut self, position: Position, player: Player) -> Self {
        self.squares[position.index()] = Square::Occupied(player);
        self
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact one-line rendering for logs: rows joined by `/`, empty squares
/// shown as `.`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            match square.mark() {
                Some(player) => write!(f, "{player}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for position in Position::ALL {
            assert!(board.is_empty(position));
        }
    }

    #[test]
    fn test_place_returns_a_new_board() {
        let board = Board::new();
        let next = board.place(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.count(Player::X), 1);
        assert_eq!(next.count(Player::O), 0);
    }

    #[test]
    fn test_display_is_compact() {
        let board = Board::new()
            .place(Position::TopLeft, Player::X)
            .place(Position::Center, Player::O);
        assert_eq!(board.to_string(), "X../.O./...");
    }
}
