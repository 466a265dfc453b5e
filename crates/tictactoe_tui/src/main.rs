//! Tic Tac Toe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, Settings, init_tracing, render_json, render_text, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    let command = cli.command.unwrap_or(Command::Tui);

    // `play` only writes to stdout, so it runs without a log file if need be.
    match (&command, init_tracing(&settings)) {
        (Command::Tui, Err(err)) => return Err(err),
        (_, Err(err)) => eprintln!("Logging disabled: {err:#}"),
        (_, Ok(())) => info!(config = %cli.config.display(), "Settings ready"),
    }

    match command {
        Command::Tui => run_tui(&settings),
        Command::Play { first, json, moves } => {
            let first = first.map(Into::into).unwrap_or(*settings.first_player());
            let game = replay(first, &moves);
            let output = if json {
                render_json(&game).context("Failed to serialize game")?
            } else {
                render_text(&game)
            };
            println!("{output}");
            Ok(())
        }
    }
}
