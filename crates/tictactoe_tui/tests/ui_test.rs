//! Rendering and hit-testing tests using ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};
use tictactoe_core::{Player, Position};
use tictactoe_tui::{Action, App, Control, ScreenLayout, Target, action_for_target, draw};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Background colour at the centre of each board cell.
fn cell_backgrounds(app: &App) -> [Color; 9] {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer: &Buffer = terminal.backend().buffer();
    ScreenLayout::new(Rect::new(0, 0, 80, 30))
        .cells
        .map(|cell| buffer[(cell.x + cell.width / 2, cell.y + cell.height / 2)].bg)
}

fn app_after(moves: &[usize]) -> App {
    let mut app = App::new(Player::X);
    for &index in moves {
        app.handle(Action::Play(index));
    }
    app
}

#[test]
fn test_status_next_player() {
    assert!(render(&app_after(&[])).contains("Next: X"));
    assert!(render(&app_after(&[4])).contains("Next: O"));
}

#[test]
fn test_status_win_and_draw() {
    assert!(render(&app_after(&[0, 4, 1, 3, 2])).contains("X wins!"));
    assert!(render(&app_after(&[0, 2, 1, 3, 5, 4, 6, 7, 8])).contains("It's a draw!"));
}

#[test]
fn test_buttons_are_drawn() {
    let screen = render(&app_after(&[]));
    for control in Control::ALL {
        assert!(screen.contains(control.label()), "{}", control.label());
    }
}

#[test]
fn test_cells_hit_test_to_their_position() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
    for (pos, cell) in Position::ALL.into_iter().zip(layout.cells) {
        let (x, y) = (cell.x + cell.width / 2, cell.y + cell.height / 2);
        assert_eq!(layout.hit_test(x, y), Some(Target::Cell(pos)));
        assert_eq!(action_for_target(Target::Cell(pos)), Action::Play(pos.to_index()));
    }
}

#[test]
fn test_cells_are_laid_out_row_major() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
    let [top_left, top_center, .., bottom_left, _, _] = layout.cells;
    assert_eq!(top_left.y, top_center.y);
    assert!(top_left.x < top_center.x);
    assert_eq!(top_left.x, bottom_left.x);
    assert!(top_left.y < bottom_left.y);
}

#[test]
fn test_buttons_hit_test_to_controls() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
    for (control, area) in Control::ALL.into_iter().zip(layout.controls) {
        assert_eq!(
            layout.hit_test(area.x + 1, area.y + 1),
            Some(Target::Control(control))
        );
    }
}

#[test]
fn test_separators_and_title_are_not_clickable() {
    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
    let sep = layout.row_separators[0];
    assert_eq!(layout.hit_test(sep.x + 1, sep.y), None);
    let col_sep = layout.col_separators[0];
    assert_eq!(layout.hit_test(col_sep.x, col_sep.y), None);
    assert_eq!(layout.hit_test(layout.title.x + 1, layout.title.y + 1), None);
}

#[test]
fn test_winning_line_is_highlighted() {
    let backgrounds = cell_backgrounds(&app_after(&[0, 4, 1, 3, 2]));
    for index in [0, 1, 2] {
        assert_eq!(backgrounds[index], Color::Green, "cell {index}");
    }
    for index in 3..9 {
        assert_ne!(backgrounds[index], Color::Green, "cell {index}");
    }
}

#[test]
fn test_cursor_highlight_only_while_active() {
    let ongoing = cell_backgrounds(&app_after(&[4]));
    assert_eq!(ongoing[4], Color::White);
    assert_eq!(ongoing.iter().filter(|bg| **bg == Color::White).count(), 1);

    let drawn = cell_backgrounds(&app_after(&[0, 2, 1, 3, 5, 4, 6, 7, 8]));
    assert!(drawn.iter().all(|bg| *bg != Color::White && *bg != Color::Green));

    let won = cell_backgrounds(&app_after(&[0, 4, 1, 3, 2]));
    assert!(won.iter().all(|bg| *bg != Color::White));
}
