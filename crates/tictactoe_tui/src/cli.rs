//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_core::Player;

/// Tic Tac Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Replay a list of moves and print the resulting board
    Play {
        /// Player who moves first (defaults to the settings file)
        #[arg(long, value_enum)]
        first: Option<FirstMark>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices 0-8, row-major from the top-left
        moves: Vec<usize>,
    },
}

/// Command-line spelling of a player mark.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMark {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<FirstMark> for Player {
    fn from(mark: FirstMark) -> Self {
        match mark {
            FirstMark::X => Player::X,
            FirstMark::O => Player::O,
        }
    }
}
