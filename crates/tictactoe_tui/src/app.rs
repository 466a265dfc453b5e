//! Application state and logic.

use tictactoe_core::{Game, MoveOutcome, Player, Position};
use tracing::{debug, info, instrument};

use crate::input::{self, Action};

/// The three buttons under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Start over with X to move.
    NewGameX,
    /// Start over with O to move.
    NewGameO,
    /// Start over with X to move; never disabled.
    Reset,
}

impl Control {
    /// Buttons in display order.
    pub const ALL: [Control; 3] = [Control::NewGameX, Control::NewGameO, Control::Reset];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Control::NewGameX => "New Game (X)",
            Control::NewGameO => "New Game (O)",
            Control::Reset => "Reset",
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates the app with a fresh game started by `first`.
    pub fn new(first: Player) -> Self {
        Self {
            game: Game::with_first_player(first),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a button currently responds.
    ///
    /// Both "New Game" buttons are disabled while nothing has been played,
    /// since they would not change anything visible. Reset always responds.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::NewGameX | Control::NewGameO => !self.game.is_pristine(),
            Control::Reset => true,
        }
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Play(index) => self.play(index),
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Press(control) => self.press(control),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, index: usize) {
        if let MoveOutcome::Applied { mv, status } = self.game.apply_move(index) {
            self.cursor = mv.position;
            debug!(%mv, %status, "Board updated");
        }
    }

    fn press(&mut self, control: Control) {
        if !self.is_enabled(control) {
            debug!(?control, "Control disabled");
            return;
        }
        match control {
            Control::NewGameX => self.game.new_game(Player::X),
            Control::NewGameO => self.game.new_game(Player::O),
            Control::Reset => self.game.reset(),
        }
    }
}
