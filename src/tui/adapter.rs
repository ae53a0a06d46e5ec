//! Interface between the timer and the terminal.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::PomoError;
use crate::pomodoro::ScreenState;

/// A keystroke, reduced to what the timer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Enter or Return
    Enter,
    /// Ctrl+C
    Interrupt,
    /// Anything else
    Other,
}

/// How `poll_key` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Return at once when no key is waiting
    #[default]
    NonBlocking,
    /// Wait for a key
    Blocking,
}

/// Drawing and keyboard input. Holds no timer logic.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalAdapter {
    /// Paint the timer screen.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, screen: &ScreenState) -> Result<(), PomoError>;

    /// Paint a selectable list with `selected` highlighted. With `allow_quit`
    /// a trailing "Quit" row is added at index `options.len()`.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render_menu(
        &mut self,
        prompt: &str,
        options: &[String],
        selected: usize,
        allow_quit: bool,
    ) -> Result<(), PomoError>;

    /// Paint a session transition prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render_prompt(&mut self, message: &str, detail: &str) -> Result<(), PomoError>;

    /// Take a waiting key, if any. Never waits in non-blocking mode.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn poll_key(&mut self) -> Result<Option<Key>, PomoError>;

    /// Wait for exactly one key.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn read_key_blocking(&mut self) -> Result<Key, PomoError>;

    /// Switch input mode. Use [`BlockingInput`] rather than calling this
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode cannot be changed.
    fn set_input_mode(&mut self, mode: InputMode) -> Result<(), PomoError>;

    /// Wait out one loop interval.
    fn idle(&mut self, interval: Duration);
}

/// Blocking input mode for the lifetime of the guard.
///
/// Non-blocking mode is restored on drop, so an error or early return while
/// waiting for a key never leaves the terminal blocking.
pub struct BlockingInput<'a, T: TerminalAdapter + ?Sized> {
    term: &'a mut T,
}

impl<'a, T: TerminalAdapter + ?Sized> BlockingInput<'a, T> {
    /// Switch `term` to blocking input.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode cannot be changed.
    pub fn acquire(term: &'a mut T) -> Result<Self, PomoError> {
        term.set_input_mode(InputMode::Blocking)?;
        debug!("blocking input acquired");
        Ok(Self { term })
    }

    /// Wait for one key.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn read_key(&mut self) -> Result<Key, PomoError> {
        self.term.read_key_blocking()
    }

    /// The terminal, for drawing while input is held.
    pub fn terminal(&mut self) -> &mut T {
        self.term
    }
}

impl<T: TerminalAdapter + ?Sized> Drop for BlockingInput<'_, T> {
    fn drop(&mut self) {
        match self.term.set_input_mode(InputMode::NonBlocking) {
            Ok(()) => debug!("blocking input released"),
            Err(e) => warn!(error = %e, "failed to restore non-blocking input"),
        }
    }
}
