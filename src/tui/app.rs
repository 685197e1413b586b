//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::widgets::ListState;
use tracing::{debug, instrument};

use super::input;
use super::ui::Hotspots;
use crate::game::{ClickOutcome, GameSession, Position, SortOrder};

/// Which pane owns keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Arrows move the board cursor; Enter places a mark.
    Board,
    /// Arrows move the list selection; Enter jumps to the selected move.
    Moves,
}

/// Outcome of handling one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Transition {
    /// Keep running.
    Stay,
    /// Tear down the terminal and exit.
    Quit,
}

/// Main application state: one game session plus UI selection state.
#[derive(Debug, Getters)]
pub(super) struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    moves_state: ListState,
    #[getter(skip)]
    hotspots: Hotspots,
}

impl App {
    /// Creates an app over a fresh session.
    pub(super) fn new(order: SortOrder) -> Self {
        let mut moves_state = ListState::default();
        moves_state.select(Some(0));
        Self {
            session: GameSession::with_sort_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            moves_state,
            hotspots: Hotspots::default(),
        }
    }

    /// Stores the hotspots reported by the latest frame.
    pub(super) fn set_hotspots(&mut self, hotspots: Hotspots) {
        self.hotspots = hotspots;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Transition::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.session.toggle_sort();
                self.sync_selection();
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(position) = Position::from_index(digit as usize - 1)
                {
                    self.place_at(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key.code),
                Focus::Moves => match key.code {
                    KeyCode::Up => self.select_previous(),
                    KeyCode::Down => self.select_next(),
                    _ => {}
                },
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place_at(self.cursor),
                Focus::Moves => self.jump_selected(),
            },
            _ => {}
        }
        Transition::Stay
    }

    /// Handles a mouse event against the latest frame's hotspots.
    #[instrument(skip(self))]
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) -> Transition {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = self.hotspots.cell_at(mouse.column, mouse.row) {
                    self.focus = Focus::Board;
                    self.cursor = position;
                    self.place_at(position);
                } else if self.hotspots.sort_at(mouse.column, mouse.row) {
                    self.session.toggle_sort();
                    self.sync_selection();
                } else if let Some(index) = self.hotspots.move_at(mouse.column, mouse.row) {
                    self.focus = Focus::Moves;
                    self.moves_state.select(Some(self.display_index(index)));
                    if index != *self.session.current_move() {
                        self.session.jump_to(index);
                    }
                }
            }
            MouseEventKind::ScrollUp if self.hotspots.over_moves(mouse.column, mouse.row) => {
                self.focus = Focus::Moves;
                self.select_previous();
            }
            MouseEventKind::ScrollDown if self.hotspots.over_moves(mouse.column, mouse.row) => {
                self.focus = Focus::Moves;
                self.select_next();
            }
            _ => {}
        }
        Transition::Stay
    }

    fn place_at(&mut self, position: Position) {
        let outcome = self.session.click(position);
        debug!(%position, ?outcome, "board intent");
        if outcome == ClickOutcome::Played {
            self.sync_selection();
        }
    }

    fn jump_selected(&mut self) {
        let Some(display) = self.moves_state.selected() else {
            return;
        };
        // The selection can go stale when a play truncates history.
        if display >= self.entry_count() {
            self.sync_selection();
            return;
        }
        let index = self.display_index(display);
        if index == *self.session.current_move() {
            return;
        }
        self.session.jump_to(index);
    }

    fn select_next(&mut self) {
        let count = self.entry_count();
        let next = match self.moves_state.selected() {
            Some(index) => (index + 1) % count,
            None => 0,
        };
        self.moves_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let count = self.entry_count();
        let previous = match self.moves_state.selected() {
            Some(index) if index > 0 => index - 1,
            _ => count - 1,
        };
        self.moves_state.select(Some(previous));
    }

    fn entry_count(&self) -> usize {
        self.session.history().len()
    }

    /// Maps between history indices and rows of the rendered list. The
    /// mapping is its own inverse, so it serves both directions.
    fn display_index(&self, index: usize) -> usize {
        match self.session.sort_order() {
            SortOrder::Ascending => index,
            SortOrder::Descending => self.entry_count() - 1 - index,
        }
    }

    /// Points the list selection at the move under view.
    fn sync_selection(&mut self) {
        let display = self.display_index(*self.session.current_move());
        self.moves_state.select(Some(display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.session().history().len(), 2);
        assert!(!app.session().board().is_empty(Position::Center));
    }

    #[test]
    fn test_enter_places_at_the_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.session().board().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_quit_keys_quit() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Transition::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Transition::Quit);
    }

    #[test]
    fn test_sort_key_flips_order_and_selection_follows() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.moves_state().selected(), Some(2));
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(*app.session().sort_order(), SortOrder::Descending);
        // Three entries, newest first: the current move sits on top.
        assert_eq!(app.moves_state().selected(), Some(0));
    }

    #[test]
    fn test_tab_then_enter_jumps_to_the_selected_move() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(*app.session().current_move(), 1);
        // History survives the jump.
        assert_eq!(app.session().history().len(), 3);
    }

    #[test]
    fn test_mouse_click_on_a_cell_hotspot_places() {
        let mut app = App::new(SortOrder::Ascending);
        let mut hotspots = Hotspots::default();
        hotspots
            .cells
            .push((Rect::new(10, 5, 12, 3), Position::TopRight));
        app.set_hotspots(hotspots);
        app.handle_mouse(click(12, 6));
        assert!(!app.session().board().is_empty(Position::TopRight));
    }

    #[test]
    fn test_mouse_click_outside_hotspots_is_ignored() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_mouse(click(0, 0));
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_mouse_click_on_a_move_row_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('5')));
        let mut hotspots = Hotspots::default();
        hotspots.move_rows.push((Rect::new(50, 8, 30, 1), 0));
        app.set_hotspots(hotspots);
        app.handle_mouse(click(55, 8));
        assert_eq!(*app.session().current_move(), 0);
        assert_eq!(app.session().history().len(), 3);
    }
}
