//! Tic-tac-toe game logic.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: the win evaluator scanning the eight fixed [`Line`]s, plus
//!   full-board and draw checks
//! - **Game**: the [`Game`] state machine that applies moves, evaluates the
//!   board and flips turns
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winning_line().map(|line| line.indices()), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use game::{Game, GameStatus, InconsistentGame, MoveOutcome, Rejection};
pub use position::Position;
pub use rules::{LINES, Line, Win};
pub use types::{Board, Player, Square};
