//! Cell view models: what each grid square should show.

use crate::game::{Board, Player, Position};

/// Presentation state for one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Which square this describes.
    pub position: Position,
    /// The mark to draw, if any.
    pub mark: Option<Player>,
    /// True when the square belongs to the winning triplet.
    pub winning: bool,
}

/// Maps a grid and the winning triplet, if any, to nine cell view models in
/// row-major order.
pub fn board_view(board: &Board, line: Option<[Position; 3]>) -> [CellView; 9] {
    Position::ALL.map(|position| CellView {
        position,
        mark: board.get(position).mark(),
        winning: line.is_some_and(|l| l.contains(&position)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_maps_to_unmarked_cells() {
        let cells = board_view(&Board::new(), None);
        assert_eq!(cells.len(), 9);
        for cell in cells {
            assert_eq!(cell.mark, None);
            assert!(!cell.winning);
        }
    }

    #[test]
    fn test_marks_land_on_their_positions() {
        let board = Board::new()
            .place(Position::TopLeft, Player::X)
            .place(Position::Center, Player::O);
        let cells = board_view(&board, None);
        assert_eq!(cells[0].mark, Some(Player::X));
        assert_eq!(cells[4].mark, Some(Player::O));
        assert_eq!(cells[8].mark, None);
    }

    #[test]
    fn test_winning_flags_cover_exactly_the_line() {
        let board = Board::new()
            .place(Position::TopLeft, Player::X)
            .place(Position::TopCenter, Player::X)
            .place(Position::TopRight, Player::X);
        let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
        let cells = board_view(&board, Some(line));
        for cell in cells {
            assert_eq!(cell.winning, line.contains(&cell.position));
        }
    }
}
