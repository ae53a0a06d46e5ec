//! Key translation for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pomodoro::Command;
use crate::tui::adapter::Key;

/// Reduce a crossterm key event to a [`Key`].
#[must_use]
pub fn translate(event: KeyEvent) -> Key {
    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }

    match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

/// Timer command bound to a key, if any. Unbound keys are ignored.
#[must_use]
pub const fn command_for(key: Key) -> Option<Command> {
    match key {
        Key::Char('s') => Some(Command::StartPause),
        Key::Char('r') => Some(Command::Reset),
        Key::Char('q') | Key::Interrupt => Some(Command::Quit),
        _ => None,
    }
}

/// Whether a key answers a transition prompt with "quit".
#[must_use]
pub const fn is_quit_answer(key: Key) -> bool {
    matches!(key, Key::Char('q' | 'Q') | Key::Interrupt)
}
