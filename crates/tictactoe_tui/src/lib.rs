//! Tic Tac Toe terminal front end.
//!
//! # Architecture
//!
//! - **App**: owns the one [`Game`](tictactoe_core::Game) and turns user
//!   [`Action`]s into game operations
//! - **Input**: key mapping and cursor movement
//! - **UI**: ratatui rendering and mouse hit-testing over a shared
//!   [`ScreenLayout`]
//! - **Play**: non-interactive replay for the `play` subcommand
//! - **Config/Logging**: TOML [`Settings`] and file-based tracing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod play;
mod terminal;
mod ui;

pub use app::{App, Control};
pub use cli::{Cli, Command, FirstMark};
pub use config::{ConfigError, Settings};
pub use input::{Action, Direction, action_for_key, move_cursor};
pub use logging::init_tracing;
pub use play::{PlayReport, render_json, render_text, replay};
pub use terminal::{action_for_target, run_tui};
pub use ui::{ScreenLayout, Target, draw};
