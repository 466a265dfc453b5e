//! Tests for the win evaluator over arbitrary boards.

use tictactoe_core::rules::{evaluate, is_draw, is_full};
use tictactoe_core::{Board, LINES, Player, Square};

/// Parses a 9-character board: `X`, `O`, anything else empty.
fn board(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(cells.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_lines_cover_rows_columns_diagonals_in_order() {
    let indices: Vec<[usize; 3]> = LINES.iter().map(|line| line.indices()).collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_completed_lines_report_owner_and_indices() {
    let cases = [
        ("XXX.O.O..", Player::X, [0, 1, 2]),
        ("X..OOOX.X", Player::O, [3, 4, 5]),
        ("O.O.O.XXX", Player::X, [6, 7, 8]),
        ("OX.OX.O..", Player::O, [0, 3, 6]),
        (".XO.XO.X.", Player::X, [1, 4, 7]),
        ("X.OX.O..O", Player::O, [2, 5, 8]),
        ("XO.OX...X", Player::X, [0, 4, 8]),
        ("X.OXO.O..", Player::O, [2, 4, 6]),
    ];
    for (cells, player, line) in cases {
        let win = evaluate(&board(cells)).unwrap_or_else(|| panic!("{cells} has a winner"));
        assert_eq!(win.player(), player, "{cells}");
        assert_eq!(win.line().indices(), line, "{cells}");
    }
}

#[test]
fn test_no_winner_at_any_fill_level() {
    for cells in [
        ".........",
        "X........",
        "XO.......",
        "XX.OO....",
        "XOXOXO...",
        "XXOOOXXOX",
    ] {
        assert_eq!(evaluate(&board(cells)), None, "{cells}");
    }
}

#[test]
fn test_evaluator_tolerates_illegal_boards() {
    assert_eq!(evaluate(&board("XXXXXXXXX")).map(|w| w.line()), Some(LINES[0]));
    assert_eq!(evaluate(&board("OOO......")).map(|w| w.player()), Some(Player::O));
    assert_eq!(evaluate(&board("XX.......")), None);
}

#[test]
fn test_full_and_draw() {
    assert!(is_full(&board("XXOOOXXOX")));
    assert!(is_draw(&board("XXOOOXXOX")));
    assert!(!is_draw(&board("XXXOOXXOO")));
    assert!(!is_full(&board("XXOOOXXO.")));
}
