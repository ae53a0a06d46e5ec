//! pomo - A Pomodoro timer for the terminal
//!
//! This crate provides a countdown timer that alternates study and break
//! sessions, with start/pause/reset controls and a prompt between sessions.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pomodoro;
pub mod tui;

pub use cli::Cli;
pub use error::PomoError;
