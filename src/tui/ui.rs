//! Stateless rendering: view models adapted onto ratatui widgets.
//!
//! [`draw`] also reports the frame's [`Hotspots`], so mouse coordinates can
//! be resolved back to intents without re-deriving the layout.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::game::{GameStatus, Player, Position};
use crate::view::{CellView, board_view, move_list};

/// Screen regions that map mouse coordinates back to intents.
#[derive(Debug, Clone, Default)]
pub(super) struct Hotspots {
    /// Board cells, by position.
    pub(super) cells: Vec<(Rect, Position)>,
    /// The sort-order control.
    pub(super) sort: Option<Rect>,
    /// The whole move-list pane, for scroll events.
    pub(super) moves_area: Option<Rect>,
    /// Visible move-list rows, by history index.
    pub(super) move_rows: Vec<(Rect, usize)>,
}

impl Hotspots {
    fn hit(rect: Rect, column: u16, row: u16) -> bool {
        rect.contains(ratatui::layout::Position::new(column, row))
    }

    /// The board cell under the pointer, if any.
    pub(super) fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(rect, _)| Self::hit(*rect, column, row))
            .map(|(_, position)| *position)
    }

    /// True when the pointer is over the sort control.
    pub(super) fn sort_at(&self, column: u16, row: u16) -> bool {
        self.sort.is_some_and(|rect| Self::hit(rect, column, row))
    }

    /// The history index of the move-list row under the pointer, if any.
    pub(super) fn move_at(&self, column: u16, row: u16) -> Option<usize> {
        self.move_rows
            .iter()
            .find(|(rect, _)| Self::hit(*rect, column, row))
            .map(|(_, index)| *index)
    }

    /// True when the pointer is anywhere over the move-list pane.
    pub(super) fn over_moves(&self, column: u16, row: u16) -> bool {
        self.moves_area
            .is_some_and(|rect| Self::hit(rect, column, row))
    }
}

/// Renders the full UI and reports this frame's hotspots.
pub(super) fn draw(frame: &mut Frame, app: &App) -> Hotspots {
    let mut hotspots = Hotspots::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(36)])
        .split(chunks[1]);

    let status = app.session().status();
    draw_board(frame, body[0], app, status, &mut hotspots);
    draw_side(frame, body[1], app, status, &mut hotspots);

    let help =
        Paragraph::new("arrows move | 1-9/Enter place | Tab focus moves | s sort | q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    hotspots
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    status: GameStatus,
    hotspots: &mut Hotspots,
) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let cells = board_view(app.session().board(), status.winning_line());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, &cells[0..3], hotspots);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, &cells[3..6], hotspots);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, &cells[6..9], hotspots);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[CellView], hotspots: &mut Hotspots) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, cells[0], hotspots);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, cells[1], hotspots);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, cells[2], hotspots);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: CellView, hotspots: &mut Hotspots) {
    let (symbol, base_style) = match cell.mark {
        Some(Player::X) => (
            "X".to_owned(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_owned(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        // Hint the digit that places here.
        None => (
            (cell.position.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut style = base_style;
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if *app.focus() == Focus::Board && *app.cursor() == cell.position {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Leading newline drops the mark onto the middle line of the cell.
    let paragraph = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
    hotspots.cells.push((area, cell.position));
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_side(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    status: GameStatus,
    hotspots: &mut Hotspots,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let status_style = match status {
        GameStatus::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Drawn => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[0]);

    let order = *app.session().sort_order();
    let sort = Paragraph::new(format!("Sort: {}", order.label()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Move order"));
    frame.render_widget(sort, chunks[1]);
    hotspots.sort = Some(chunks[1]);

    draw_moves(frame, chunks[2], app, hotspots);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, hotspots: &mut Hotspots) {
    let session = app.session();
    let entries = move_list(
        session.history(),
        *session.current_move(),
        *session.sort_order(),
    );

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            ListItem::new(entry.label.clone()).style(style)
        })
        .collect();

    let highlight = if *app.focus() == Focus::Moves {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).title("Moves");
    let inner = block.inner(area);
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut list_state = app.moves_state().clone();
    frame.render_stateful_widget(list, area, &mut list_state);

    hotspots.moves_area = Some(inner);
    let offset = list_state.offset();
    for (display, entry) in entries.iter().enumerate().skip(offset) {
        let row = display - offset;
        if row >= inner.height as usize {
            break;
        }
        // The current entry is status text, not a jump target.
        if entry.current {
            continue;
        }
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        hotspots.move_rows.push((rect, entry.index));
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
