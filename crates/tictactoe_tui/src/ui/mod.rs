//! UI rendering using ratatui.
//!
//! [`ScreenLayout`] is computed from the terminal area alone, so the same
//! rectangles serve drawing and mouse hit-testing.

mod board;

use ratatui::{
    Frame,
    layout::{self, Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameStatus, Position};

use crate::{App, Control};

pub use board::render_board;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_GAP: u16 = 2;

/// Where each part of the screen is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Cells in index order.
    pub cells: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators between board columns, two per row.
    pub col_separators: [Rect; 6],
    /// Status line.
    pub status: Rect,
    /// Buttons in [`Control::ALL`] order.
    pub controls: [Rect; 3],
    /// Key help line.
    pub help: Rect,
}

/// A clickable thing on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// A button.
    Control(Control),
}

impl ScreenLayout {
    /// Splits `area` into title, board, status, buttons and help.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(3),            // Controls
                Constraint::Length(3),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        let bar = center_rect(chunks[3], BUTTON_WIDTH * 3 + BUTTON_GAP * 2, 3);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(bar);

        Self {
            title: chunks[0],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            status: chunks[2],
            controls: [buttons[0], buttons[2], buttons[4]],
            help: chunks[4],
        }
    }

    /// What lies under terminal cell (`column`, `row`), if anything clickable.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        let point = layout::Position::new(column, row);
        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(index).map(Target::Cell);
        }
        self.controls
            .iter()
            .zip(Control::ALL)
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, control)| Target::Control(control))
    }
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_board(frame, &layout, app);

    let status_style = match app.game().status() {
        GameStatus::Ongoing => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(app.game().status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    for (control, area) in Control::ALL.into_iter().zip(layout.controls) {
        let style = if app.is_enabled(control) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(control.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, area);
    }

    let help = Paragraph::new("Click or 1-9: play | Arrows+Enter: cursor | X/O: new game | R: reset | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
