//! Screen — the display device the player draws through.
//!
//! The player needs exactly two things from a display: repaint the whole
//! canvas, and produce at most one key per tick. `TerminalScreen` is the
//! real crossterm implementation; tests substitute an in-memory recorder.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, event, execute, queue, style, terminal};

use crate::grid::Grid;

/// How long to wait for a key at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWait {
    /// Block until a key arrives.
    Blocking,
    /// Wait at most this long, returning no key on timeout.
    Timeout(Duration),
}

pub trait Screen {
    /// Repaint the whole canvas.
    fn paint(&mut self, canvas: &Grid<char>) -> Result<()>;

    /// Wait for the next key per `wait`; `None` means the wait timed out
    /// (or, in blocking mode, that a non-character key was pressed).
    fn wait_key(&mut self, wait: KeyWait) -> Result<Option<char>>;
}

/// The real terminal: raw mode and the alternate screen for the lifetime of
/// the value, full repaint from the home position each tick.
pub struct TerminalScreen {
    stdout: Stdout,
    _raw: RawModeGuard,
}

impl TerminalScreen {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        let raw = RawModeGuard::acquire(&mut stdout)?;
        Ok(Self { stdout, _raw: raw })
    }
}

impl Screen for TerminalScreen {
    fn paint(&mut self, canvas: &Grid<char>) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0))?;
        for row in canvas.rows() {
            let line: String = row.iter().collect();
            queue!(self.stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn wait_key(&mut self, wait: KeyWait) -> Result<Option<char>> {
        match wait {
            KeyWait::Timeout(limit) => {
                if !event::poll(limit)? {
                    return Ok(None);
                }
                match event::read()? {
                    event::Event::Key(key) => Ok(key_char(&key)),
                    _ => Ok(None),
                }
            }
            KeyWait::Blocking => loop {
                if let event::Event::Key(key) = event::read()? {
                    return Ok(key_char(&key));
                }
            },
        }
    }
}

fn key_char(key: &event::KeyEvent) -> Option<char> {
    match key.code {
        event::KeyCode::Char(c) => Some(c),
        _ => None,
    }
}

/// Scoped raw-mode acquisition. Restoration lives in `Drop`, so the original
/// terminal settings come back on every exit path, panics included.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire(stdout: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
