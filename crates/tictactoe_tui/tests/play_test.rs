//! Tests for the non-interactive `play` command.

use clap::Parser;
use tictactoe_core::{GameStatus, Player};
use tictactoe_tui::{Cli, Command, FirstMark, PlayReport, render_json, render_text, replay};

#[test]
fn test_row_win_text() {
    let game = replay(Player::X, &[0, 4, 1, 3, 2]);
    assert_eq!(render_text(&game), "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nX wins!");
}

#[test]
fn test_draw_text() {
    let game = replay(Player::X, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    assert_eq!(render_text(&game), "X|X|O\n-+-+-\nO|O|X\n-+-+-\nX|O|X\n\nIt's a draw!");
}

#[test]
fn test_ignored_moves_are_skipped() {
    let game = replay(Player::O, &[4, 4, 12]);
    assert_eq!(render_text(&game), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nNext: X");
}

#[test]
fn test_report_fields() {
    let game = replay(Player::X, &[0, 4, 1, 3, 2]);
    let report = PlayReport::from(&game);
    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(report.winning_line, Some([0, 1, 2]));
    assert!(!report.active);
    assert_eq!(report.board[4], Some(Player::O));
    assert_eq!(report.board[8], None);
}

#[test]
fn test_json_output() {
    let game = replay(Player::X, &[0, 4, 1, 3, 2]);
    let json: serde_json::Value = serde_json::from_str(&render_json(&game).unwrap()).unwrap();
    assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["board"][0], "X");
    assert_eq!(json["board"][8], serde_json::Value::Null);
    assert_eq!(json["message"], "X wins!");
    assert_eq!(json["active"], false);
}

#[test]
fn test_cli_parses_play() {
    let cli = Cli::try_parse_from(["tictactoe", "play", "--first", "o", "--json", "0", "4"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Play {
            first: Some(FirstMark::O),
            json: true,
            moves: vec![0, 4],
        })
    );
}

#[test]
fn test_cli_defaults_to_no_subcommand() {
    let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.config, std::path::PathBuf::from("tictactoe.toml"));
}
