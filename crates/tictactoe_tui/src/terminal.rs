//! Interactive terminal session.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument, warn};

use crate::input::{self, Action};
use crate::ui::{self, ScreenLayout, Target};
use crate::{App, Settings};

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    /// Switches the terminal into game mode.
    ///
    /// A failure part way through restores whatever was already changed.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }

    /// Puts the terminal back. Runs once; later calls are no-ops.
    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        restore_terminal(&mut io::stdout(), disable_raw_mode)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, then the alternate screen and mouse capture, then shows
/// the cursor. Every step runs even if an earlier one fails; the first error
/// is returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    let mut session = TerminalSession::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let mut app = App::new(*settings.first_player());
            run_loop(&mut terminal, &mut app)
        });
    let restored = session.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res?;
    restored?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();
    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, app);
        })?;

        if let Some(action) = next_action(area)? {
            app.handle(action);
        }
    }
    info!("User quit");
    Ok(())
}

/// Blocks for the next terminal event and turns it into an action.
fn next_action(area: Rect) -> Result<Option<Action>> {
    let action = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => input::action_for_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => ScreenLayout::new(area)
            .hit_test(column, row)
            .map(action_for_target),
        _ => None,
    };
    if let Some(action) = action {
        debug!(?action, "Input");
    }
    Ok(action)
}

/// What clicking `target` does.
pub fn action_for_target(target: Target) -> Action {
    match target {
        Target::Cell(pos) => Action::Play(pos.to_index()),
        Target::Control(control) => Action::Press(control),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const LEAVE_ALTERNATE_SCREEN: &[u8] = b"\x1b[?1049l";
    const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_restore_leaves_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out, || Ok(())).unwrap();
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
        assert!(contains(&out, SHOW_CURSOR));
    }

    #[test]
    fn test_restore_continues_after_raw_mode_failure() {
        let mut out = Vec::new();
        let err = restore_terminal(&mut out, || Err(io::Error::other("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
        assert!(contains(&out, SHOW_CURSOR));
    }

    /// Writer that records each write into a shared step log.
    struct StepLog(Rc<RefCell<Vec<&'static str>>>);

    impl Write for StepLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().push("write");
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_disables_raw_mode_first() {
        let steps = Rc::new(RefCell::new(Vec::new()));
        let mut out = StepLog(Rc::clone(&steps));
        restore_terminal(&mut out, || {
            steps.borrow_mut().push("raw");
            Ok(())
        })
        .unwrap();

        let steps = steps.borrow();
        assert_eq!(steps.first(), Some(&"raw"));
        assert!(steps.len() > 1);
    }
}
