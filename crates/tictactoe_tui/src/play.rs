//! Non-interactive replay of a move list.

use serde::Serialize;
use tictactoe_core::{Game, GameStatus, MoveOutcome, Player, Square};
use tracing::{info, instrument, warn};

/// Snapshot printed by `tictactoe play --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    /// Cells in index order: `"X"`, `"O"` or `null`.
    pub board: [Option<Player>; 9],
    /// Player to move, or the winner once the game is won.
    pub to_move: Player,
    /// Whether further moves would be accepted.
    pub active: bool,
    /// Derived status.
    pub status: GameStatus,
    /// Indices of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Human-readable status line.
    pub message: String,
}

impl From<&Game> for PlayReport {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board().squares().map(Square::player),
            to_move: game.to_move(),
            active: game.is_active(),
            status: game.status(),
            winning_line: game.winning_line().map(|line| line.indices()),
            message: game.status_text(),
        }
    }
}

/// Plays `moves` from a fresh game started by `first`.
///
/// Moves the game would ignore are logged and skipped.
#[instrument(skip(moves))]
pub fn replay(first: Player, moves: &[usize]) -> Game {
    let mut game = Game::with_first_player(first);
    for &index in moves {
        if let MoveOutcome::Ignored(rejection) = game.apply_move(index) {
            warn!(index, %rejection, "Skipping move");
        }
    }
    info!(status = %game.status(), "Replay finished");
    game
}

/// Renders the board followed by a blank line and the status text.
pub fn render_text(game: &Game) -> String {
    format!("{}\n\n{}", game.board(), game.status_text())
}

/// Renders the game as pretty-printed JSON.
pub fn render_json(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PlayReport::from(game))
}
