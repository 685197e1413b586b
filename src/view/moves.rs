//! Move-list view models: labels and jump targets for the history browser.

use strum::IntoEnumIterator;

use crate::game::{Board, Position, SortOrder};

/// One entry in the move-history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry refers to.
    pub index: usize,
    /// Text to show for the entry.
    pub label: String,
    /// True for the move currently under view. Rendered as plain text
    /// instead of a jump target.
    pub current: bool,
}

/// The square that changed between a grid and its successor.
///
/// Well-formed histories differ in exactly one square per step; equal grids
/// yield `None`.
pub fn changed_cell(prev: &Board, next: &Board) -> Option<Position> {
    Position::iter().find(|&position| prev.get(position) != next.get(position))
}

/// Builds the move list for `history` with `current` under view.
///
/// Entry 0 reads "Go to game start", later entries read
/// "Go to move #N (column, row)" located by the square added at that move,
/// and the current entry reads "You are at move #N". Descending order
/// reverses the returned list only; history itself is never reordered.
pub fn move_list(history: &[Board], current: usize, order: SortOrder) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..history.len())
        .map(|index| MoveEntry {
            index,
            label: label_for(history, index, index == current),
            current: index == current,
        })
        .collect();
    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}

fn label_for(history: &[Board], index: usize, current: bool) -> String {
    if current {
        return format!("You are at move #{index}");
    }
    if index == 0 {
        return "Go to game start".to_owned();
    }
    match changed_cell(&history[index - 1], &history[index]) {
        Some(position) => format!(
            "Go to move #{index} ({}, {})",
            position.column(),
            position.row()
        ),
        // Unreachable for histories built through the session; keep the
        // entry usable anyway.
        None => format!("Go to move #{index}"),
    }
}
