//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_core::{Player, Position, Square};

use super::ScreenLayout;
use crate::App;

/// Renders the board: marks, the keyboard cursor and the winning line.
pub fn render_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let game = app.game();
    let winning_line = game.winning_line();

    for (pos, area) in Position::ALL.into_iter().zip(layout.cells) {
        let highlight = if winning_line.is_some_and(|line| line.contains(pos)) {
            Some(Style::default().bg(Color::Green).fg(Color::Black))
        } else if pos == app.cursor() && game.is_active() {
            Some(Style::default().bg(Color::White).fg(Color::Black))
        } else {
            None
        };
        render_square(frame, area, game.board().get(pos), pos, highlight);
    }

    for area in layout.row_separators {
        render_separator(frame, area);
    }
    for area in layout.col_separators {
        render_vertical_sep(frame, area);
    }
}

fn render_square(frame: &mut Frame, area: Rect, square: Square, pos: Position, highlight: Option<Style>) {
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if let Some(highlight) = highlight {
        style = style.patch(highlight);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(highlight.unwrap_or_default())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
