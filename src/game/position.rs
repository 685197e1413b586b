//! Typed grid locations.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A position on the grid, row-major from the top-left.
///
/// Named variants cover exactly the nine cells, so board access never needs
/// a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left corner (index 0).
    TopLeft,
    /// Top edge (index 1).
    TopCenter,
    /// Top-right corner (index 2).
    TopRight,
    /// Left edge (index 3).
    MiddleLeft,
    /// Center of the grid (index 4).
    Center,
    /// Right edge (index 5).
    MiddleRight,
    /// Bottom-left corner (index 6).
    BottomLeft,
    /// Bottom edge (index 7).
    BottomCenter,
    /// Bottom-right corner (index 8).
    BottomRight,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Row-major index, 0 through 8.
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// The position for a row-major index, when in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-based column, counted left to right.
    pub fn column(self) -> usize {
        self.index() % 3 + 1
    }

    /// 1-based row, counted top to bottom.
    pub fn row(self) -> usize {
        self.index() / 3 + 1
    }

    /// Human-readable name, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trips() {
        for position in Position::iter() {
            assert_eq!(Position::from_index(position.index()), Some(position));
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_matches_iteration_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL);
    }

    #[test]
    fn test_column_and_row_are_one_based() {
        assert_eq!(Position::TopLeft.column(), 1);
        assert_eq!(Position::TopLeft.row(), 1);
        assert_eq!(Position::TopCenter.column(), 2);
        assert_eq!(Position::TopCenter.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 3);
        assert_eq!(Position::MiddleRight.row(), 2);
        assert_eq!(Position::BottomRight.column(), 3);
        assert_eq!(Position::BottomRight.row(), 3);
    }
}
