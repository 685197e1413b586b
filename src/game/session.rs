//! The game session: move history, current-move pointer, and list order.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::invariants;
use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Player};

/// Display direction for the move list.
///
/// Presentation state only: flipping it never touches the history or the
/// current move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first, game start at the top.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Flips the direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Derived state of the grid under view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Somebody completed a triplet.
    #[display("Winner: {winner}")]
    Won {
        /// The player holding the completed triplet.
        winner: Player,
        /// The completed triplet, for highlighting.
        line: [Position; 3],
    },
    /// Every square is filled and nobody won.
    #[display("Draw!")]
    Drawn,
    /// The game continues.
    #[display("Next player: {next}")]
    InProgress {
        /// Whose mark the next move places.
        next: Player,
    },
}

impl GameStatus {
    /// The winning triplet, when there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Self::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True once the game is decided, by win or by draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// What became of a click on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The move was applied and recorded.
    Played,
    /// Ignored: the grid under view already has a winner.
    GameOver,
    /// Ignored: the square is already occupied.
    Occupied,
}

/// Owns one game's full state: every grid since the start, the move pointer,
/// and the move-list order preference.
///
/// `history[0]` is the empty starting grid, and each later entry adds exactly
/// one mark to its predecessor. Time travel moves `current_move`; playing
/// from a past grid discards the abandoned future before appending.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// Every grid state since game start, oldest first.
    history: Vec<Board>,
    /// Index into `history` of the grid under view.
    current_move: usize,
    /// Move-list display direction.
    sort_order: SortOrder,
}

impl GameSession {
    /// Creates a session holding only the empty starting grid.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a session with an explicit initial move-list order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        history: Vec<Board>,
        current_move: usize,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            history,
            current_move,
            sort_order,
        }
    }

    /// The grid at the current move.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose mark the next move places: X on even move numbers, O on odd.
    pub fn next_player(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Derives the status of the grid under view.
    ///
    /// A completed triplet takes priority over a full grid, which takes
    /// priority over the in-progress turn indicator.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        if let Some(win) = check_winner(board) {
            return GameStatus::Won {
                winner: win.player,
                line: win.line,
            };
        }
        if is_full(board) {
            return GameStatus::Drawn;
        }
        GameStatus::InProgress {
            next: self.next_player(),
        }
    }

    /// Applies a click on `position` of the grid under view.
    ///
    /// Clicks on a decided game or an occupied square are ignored without
    /// touching any state. A valid click places the next player's mark and
    /// records the new grid via [`GameSession::play`].
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> ClickOutcome {
        let board = *self.board();
        if check_winner(&board).is_some() {
            debug!(%position, "click ignored, game already decided");
            return ClickOutcome::GameOver;
        }
        if !board.is_empty(position) {
            debug!(%position, "click ignored, square occupied");
            return ClickOutcome::Occupied;
        }
        let mover = self.next_player();
        self.play(board.place(position, mover));
        ClickOutcome::Played
    }

    /// Records `next` as the grid after the current move.
    ///
    /// Any abandoned future is discarded first: grids past `current_move`
    /// are dropped, `next` is appended, and the pointer advances to it.
    #[instrument(skip(self, next))]
    pub fn play(&mut self, next: Board) {
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        debug!(
            move_number = self.current_move,
            history_len = self.history.len(),
            grid = %next,
            history = %history_json(&self.history),
            "move recorded"
        );
        invariants::assert_invariants(self);
    }

    /// Moves the view pointer to another recorded move. Never alters history.
    ///
    /// # Panics
    ///
    /// Panics when `target` is past the end of history. Callers take indices
    /// from the rendered move list, which is always in range; anything else
    /// is a bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, target: usize) {
        assert!(
            target < self.history.len(),
            "jump target {target} out of range for history of length {}",
            self.history.len()
        );
        self.current_move = target;
        debug!(current_move = target, "jumped");
    }

    /// Flips the move-list display direction.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(order = self.sort_order.label(), "sort order toggled");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The full history as JSON, for the transition log.
fn history_json(history: &[Board]) -> String {
    serde_json::to_string(history).unwrap_or_else(|_| "<unserializable>".to_owned())
}
