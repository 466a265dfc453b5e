//! The tic-tac-toe game state machine.
//!
//! A [`Game`] stores only the board, the player to move and whether play is
//! still active. Everything else (status, winner, winning line) is derived
//! from the board on demand by the [`rules`](crate::rules).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{self, Line};
use crate::{Board, Move, Player, Position, Square};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[display("ongoing")]
    Ongoing,
    /// A player completed a line.
    #[display("{} won", _0)]
    Won(Player),
    /// The board filled with no completed line.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Why a move request was ignored.
///
/// Ignored moves are not errors: the game is left untouched and play
/// continues. This only tells the caller which rule turned the move away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The index is not 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed.
    Applied {
        /// The move that was made.
        mv: Move,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Tic-tac-toe game engine.
///
/// Deserializing checks that `active` agrees with the board, so a loaded
/// game is always ongoing, won or drawn and never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    board: Board,
    to_move: Player,
    active: bool,
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    to_move: Player,
    active: bool,
}

/// A serialized game whose `active` flag contradicts its board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Game marked active={} but board is {}", active, status)]
pub struct InconsistentGame {
    /// The stored flag.
    pub active: bool,
    /// Status derived from the board.
    pub status: GameStatus,
}

impl TryFrom<GameRecord> for Game {
    type Error = InconsistentGame;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Game {
            board: record.board,
            to_move: record.to_move,
            active: record.active,
        };
        let status = game.status();
        if game.active == status.is_terminal() {
            return Err(InconsistentGame {
                active: game.active,
                status,
            });
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game with `first` to move.
    pub fn with_first_player(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            active: true,
        }
    }

    /// Replays `indices` from a fresh game started by `first`.
    ///
    /// Moves that would be ignored in live play are ignored here too.
    #[instrument(skip(indices))]
    pub fn from_moves(first: Player, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::with_first_player(first);
        for index in indices {
            game.apply_move(index);
        }
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next valid move places.
    ///
    /// After a win this is still the winner, as the turn does not pass.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Empty board and still active: nothing has been played yet.
    pub fn is_pristine(&self) -> bool {
        self.active && self.board.is_clear()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Ignored, with no state change, when the game is over, the index is
    /// out of range, or the square is occupied. Otherwise the board is
    /// evaluated: a completed line ends the game as a win, a full board ends
    /// it as a draw, and anything else passes the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let position = match self.check_move(index) {
            Ok(position) => position,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return MoveOutcome::Ignored(rejection);
            }
        };

        let mv = Move::new(self.to_move, position);
        self.board.set(position, Square::Occupied(mv.player));

        let status = self.status();
        match status {
            GameStatus::Ongoing => self.to_move = self.to_move.opponent(),
            GameStatus::Won(_) | GameStatus::Draw => {
                self.active = false;
                info!(%status, "Game over");
            }
        }

        debug!(%mv, %status, "Move applied");
        MoveOutcome::Applied { mv, status }
    }

    /// Validates a move request without applying it.
    fn check_move(&self, index: usize) -> Result<Position, Rejection> {
        if !self.active {
            return Err(Rejection::GameOver);
        }
        let position = Position::from_index(index).ok_or(Rejection::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(Rejection::Occupied(position));
        }
        Ok(position)
    }

    /// Returns the game that results from playing `index`, leaving `self`
    /// untouched. An ignored move yields an identical copy.
    pub fn with_move(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.apply_move(index);
        next
    }

    /// Starts over: empty board, `first` to move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, first: Player) {
        info!("Starting new game");
        *self = Self::with_first_player(first);
    }

    /// Starts over with X to move.
    pub fn reset(&mut self) {
        self.new_game(Player::X);
    }

    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// The winner, if a line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board)
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// One-line status for display: `Next: X`, `O wins!` or `It's a draw!`.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Ongoing => format!("Next: {}", self.to_move),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
