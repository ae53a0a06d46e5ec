//! Terminal User Interface (TUI) for pomo.
//!
//! Menus, prompts and the timer screen. Built with ratatui and crossterm.
//! The event loop only talks to the terminal through [`TerminalAdapter`], so
//! it runs the same against the real terminal and a test double.

pub mod adapter;
pub mod app;
mod backend;
pub mod event;
pub mod menu;
mod ui;

pub use adapter::{BlockingInput, InputMode, Key, TerminalAdapter};
pub use app::{run, run_timer};
pub use backend::CrosstermTerminal;
