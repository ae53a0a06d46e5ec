//! Pomodoro timer core.
//!
//! Everything here is free of terminal I/O:
//! - Tick accounting for the active session
//! - The study/break state machine
//! - Progress and clock values for the screen
//! - The fixed duration presets

pub mod clock;
pub mod controller;
pub mod display;
pub mod presets;
pub mod session;

pub use clock::{advance, TickState};
pub use controller::{Command, Flow, SessionController, TransitionPrompt};
pub use display::{progress, render_progress_bar, ScreenState};
pub use presets::{break_options, study_options, TimerOption};
pub use session::{RunState, SessionContext, SessionKind, SessionTime, Status};
