//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The positions on this line, in ascending index order.
    pub const fn positions(self) -> [Position; 3] {
        self.0
    }

    /// The board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: Line,
}

impl Win {
    /// The player holding all three squares.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The completed line.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Scans [`LINES`] in order and returns the first completed one.
///
/// A line is complete when its three squares are occupied by the same
/// player. Returns `None` when no line is complete, however full the
/// board is.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player())
}

/// Returns the winning line, if any.
pub fn winning_line(board: &Board) -> Option<Line> {
    evaluate(board).map(|win| win.line())
}
