//! Integration tests for the board view models.

use noughts::{
    Board, GameSession, GameStatus, LINES, Player, Position, board_view, check_winner,
};

fn won_session() -> GameSession {
    let mut session = GameSession::new();
    for position in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        session.click(position);
    }
    session
}

#[test]
fn test_cells_mirror_the_grid() {
    let board = Board::new()
        .place(Position::TopLeft, Player::X)
        .place(Position::Center, Player::O)
        .place(Position::BottomRight, Player::X);
    let cells = board_view(&board, None);

    for cell in cells {
        assert_eq!(cell.mark, board.get(cell.position).mark());
        assert!(!cell.winning);
    }
}

#[test]
fn test_cells_keep_row_major_order() {
    let cells = board_view(&Board::new(), None);
    let positions: Vec<Position> = cells.iter().map(|cell| cell.position).collect();
    assert_eq!(positions, Position::ALL);
}

#[test]
fn test_the_winning_line_is_flagged_for_highlighting() {
    let session = won_session();
    let win = check_winner(session.board()).unwrap();
    let cells = board_view(session.board(), Some(win.line));

    let flagged: Vec<Position> = cells
        .iter()
        .filter(|cell| cell.winning)
        .map(|cell| cell.position)
        .collect();
    assert_eq!(flagged, LINES[0]);
}

#[test]
fn test_status_exposes_the_line_only_when_won() {
    let session = won_session();
    assert_eq!(session.status().winning_line(), Some(LINES[0]));

    let fresh = GameSession::new();
    assert_eq!(fresh.status().winning_line(), None);
    assert_eq!(
        fresh.status(),
        GameStatus::InProgress { next: Player::X }
    );
    assert_eq!(fresh.status().to_string(), "Next player: X");
}

#[test]
fn test_time_travel_changes_what_the_view_sees() {
    let mut session = won_session();
    session.jump_to(2);

    // Two marks on the grid under view, and no winner yet.
    let cells = board_view(session.board(), session.status().winning_line());
    let marks = cells.iter().filter(|cell| cell.mark.is_some()).count();
    assert_eq!(marks, 2);
    assert!(cells.iter().all(|cell| !cell.winning));
    assert!(!session.status().is_over());
}
