//! Crossterm-backed terminal.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::error::PomoError;
use crate::pomodoro::ScreenState;
use crate::tui::adapter::{InputMode, Key, TerminalAdapter};
use crate::tui::{event as keys, ui};

/// The real terminal: raw mode on the alternate screen.
///
/// The terminal is restored when this value is dropped, including on error
/// paths out of the event loop.
pub struct CrosstermTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mode: InputMode,
    bar_width: usize,
}

impl CrosstermTerminal {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not a terminal or the terminal cannot be
    /// switched to raw mode.
    pub fn new(bar_width: usize) -> Result<Self, PomoError> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(PomoError::Terminal(
                "stdout is not a terminal; pomo needs an interactive terminal".to_string(),
            ));
        }

        enable_raw_mode().map_err(|e| PomoError::terminal("Failed to enable raw mode", &e))?;

        let mut stdout = stdout;
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(PomoError::terminal("Failed to setup terminal", &e));
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(PomoError::terminal("Failed to create terminal", &e));
            }
        };
        terminal.hide_cursor().ok();
        debug!("terminal initialized");

        Ok(Self {
            terminal,
            mode: InputMode::NonBlocking,
            bar_width,
        })
    }

    fn draw<F>(&mut self, render: F) -> Result<(), PomoError>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal
            .draw(render)
            .map(|_| ())
            .map_err(|e| PomoError::terminal("Failed to draw", &e))
    }
}

impl TerminalAdapter for CrosstermTerminal {
    fn render(&mut self, screen: &ScreenState) -> Result<(), PomoError> {
        let bar_width = self.bar_width;
        self.draw(|frame| ui::render_timer(frame, screen, bar_width))
    }

    fn render_menu(
        &mut self,
        prompt: &str,
        options: &[String],
        selected: usize,
        allow_quit: bool,
    ) -> Result<(), PomoError> {
        self.draw(|frame| ui::render_menu(frame, prompt, options, selected, allow_quit))
    }

    fn render_prompt(&mut self, message: &str, detail: &str) -> Result<(), PomoError> {
        self.draw(|frame| ui::render_prompt(frame, message, detail))
    }

    fn poll_key(&mut self) -> Result<Option<Key>, PomoError> {
        let Some(timeout) = poll_timeout(self.mode) else {
            return self.read_key_blocking().map(Some);
        };

        while event::poll(timeout).map_err(|e| PomoError::terminal("Event poll failed", &e))? {
            if let Some(key) = read_key_event()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    fn read_key_blocking(&mut self) -> Result<Key, PomoError> {
        loop {
            if let Some(key) = read_key_event()? {
                return Ok(key);
            }
        }
    }

    /// Crossterm has no separate blocking mode: `event::read` always blocks
    /// and `event::poll` never does with a zero timeout. The mode only
    /// decides how [`poll_key`](TerminalAdapter::poll_key) waits, so the
    /// [`BlockingInput`](crate::tui::BlockingInput) guard matters for
    /// adapters that do switch modes.
    fn set_input_mode(&mut self, mode: InputMode) -> Result<(), PomoError> {
        self.mode = mode;
        Ok(())
    }

    fn idle(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        restore();
        self.terminal.show_cursor().ok();
        debug!("terminal restored");
    }
}

/// Read one event; key presses are translated, everything else is skipped.
fn read_key_event() -> Result<Option<Key>, PomoError> {
    match event::read().map_err(|e| PomoError::terminal("Event read failed", &e))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(keys::translate(key))),
        _ => Ok(None),
    }
}

/// How long `poll_key` waits for input. `None` waits until a key arrives.
const fn poll_timeout(mode: InputMode) -> Option<Duration> {
    match mode {
        InputMode::NonBlocking => Some(Duration::ZERO),
        InputMode::Blocking => None,
    }
}

fn restore() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_follows_mode() {
        assert_eq!(poll_timeout(InputMode::NonBlocking), Some(Duration::ZERO));
        assert_eq!(poll_timeout(InputMode::Blocking), None);
        assert_eq!(poll_timeout(InputMode::default()), Some(Duration::ZERO));
    }
}
