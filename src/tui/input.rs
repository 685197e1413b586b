//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

use crate::game::Position;

/// Moves the board cursor one cell in the direction of an arrow key,
/// clamping at the grid edges.
pub(super) fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.index();
    let (column, row) = (index % 3, index / 3);
    let (column, row) = match key {
        KeyCode::Left => (column.saturating_sub(1), row),
        KeyCode::Right => ((column + 1).min(2), row),
        KeyCode::Up => (column, row.saturating_sub(1)),
        KeyCode::Down => (column, (row + 1).min(2)),
        _ => (column, row),
    };
    Position::from_index(row * 3 + column).unwrap_or(cursor)
}
