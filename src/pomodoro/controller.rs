//! Study/break state machine.
//!
//! The controller owns the run state, the active session kind and the clock.
//! The event loop feeds it commands and ticks; when a session runs out the
//! loop hands it a confirmation callback and the controller performs the
//! switch to the next session.

use std::time::Duration;

use tracing::{debug, info};

use super::clock::TickState;
use super::display::{split_mmss, ScreenState};
use super::session::{RunState, SessionContext, SessionKind, SessionTime, Status};

/// A user command for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a stopped timer, or toggle between running and paused
    StartPause,
    /// Stop and rewind the active session
    Reset,
    /// Leave the application
    Quit,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping
    Continue,
    /// Stop the application
    Quit,
}

/// What to show the user when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPrompt {
    /// Session that just finished
    pub completed: SessionKind,
    /// Headline
    pub message: &'static str,
    /// Length of the session about to start
    pub next_duration: SessionTime,
}

impl TransitionPrompt {
    /// Detail line, e.g. "Break time: 05:00".
    #[must_use]
    pub fn detail(&self) -> String {
        let label = match self.completed.next() {
            SessionKind::Study => "Study time",
            SessionKind::Break => "Break time",
        };
        format!("{label}: {}", self.next_duration)
    }
}

/// Drives the Pomodoro cycle for one run of the program.
#[derive(Debug, Clone)]
pub struct SessionController {
    context: SessionContext,
    kind: SessionKind,
    run_state: RunState,
    clock: TickState,
    /// Set while the break is loaded but not yet confirmed
    break_ready: bool,
}

impl SessionController {
    /// Create a stopped controller at the start of a study session.
    #[must_use]
    pub const fn new(context: SessionContext) -> Self {
        Self {
            context,
            kind: SessionKind::Study,
            run_state: RunState::Stopped,
            clock: TickState::full(context.study),
            break_ready: false,
        }
    }

    /// Apply a user command.
    pub fn handle(&mut self, command: Command) -> Flow {
        debug!(?command, kind = %self.kind, run_state = ?self.run_state, "command");
        match command {
            Command::StartPause => self.toggle(),
            Command::Reset => self.reset(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Start, pause or resume.
    pub fn toggle(&mut self) {
        self.run_state = match self.run_state {
            RunState::Stopped | RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
    }

    /// Stop and rewind the active session to its full length.
    pub fn reset(&mut self) {
        self.run_state = RunState::Stopped;
        self.break_ready = false;
        self.clock = TickState::full(self.context.duration_of(self.kind));
    }

    /// Advance the clock by one loop interval.
    ///
    /// Does nothing unless the timer is running. Returns true when the session
    /// has just run out; the controller is then stopped and the caller must
    /// run [`Self::complete_session`].
    #[must_use]
    pub fn tick(&mut self, interval: Duration) -> bool {
        if self.run_state != RunState::Running {
            return false;
        }
        let expired = self.clock.advance(interval);
        if expired {
            self.run_state = RunState::Stopped;
        }
        expired
    }

    /// Switch to the next session after the current one has run out.
    ///
    /// `confirm` is shown the prompt for the transition and returns false if
    /// the user chose to quit. On confirmation the next session starts
    /// running immediately.
    ///
    /// # Errors
    ///
    /// Returns whatever error `confirm` returns.
    pub fn complete_session<F, E>(&mut self, confirm: F) -> Result<Flow, E>
    where
        F: FnOnce(&TransitionPrompt) -> Result<bool, E>,
    {
        let completed = self.kind;
        info!(session = %completed, "session complete");

        match completed {
            SessionKind::Study => {
                self.load(SessionKind::Break);
                self.break_ready = true;
                if !confirm(&self.prompt_for(completed))? {
                    return Ok(Flow::Quit);
                }
                self.break_ready = false;
            }
            SessionKind::Break => {
                if !confirm(&self.prompt_for(completed))? {
                    return Ok(Flow::Quit);
                }
                self.load(SessionKind::Study);
            }
        }

        self.run_state = RunState::Running;
        info!(session = %self.kind, "session started");
        Ok(Flow::Continue)
    }

    fn load(&mut self, kind: SessionKind) {
        self.kind = kind;
        self.run_state = RunState::Stopped;
        self.clock = TickState::full(self.context.duration_of(kind));
    }

    fn prompt_for(&self, completed: SessionKind) -> TransitionPrompt {
        let message = match completed {
            SessionKind::Study => "Study session complete! Time for a break.",
            SessionKind::Break => "Break complete! Press any key to start a new study session.",
        };
        TransitionPrompt {
            completed,
            message,
            next_duration: self.context.duration_of(completed.next()),
        }
    }

    /// Active session.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Current run state.
    #[must_use]
    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Check if the timer is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Clock of the active session.
    #[must_use]
    pub const fn clock(&self) -> TickState {
        self.clock
    }

    /// Durations chosen at startup.
    #[must_use]
    pub const fn context(&self) -> SessionContext {
        self.context
    }

    /// Status line for the current state.
    #[must_use]
    pub const fn status(&self) -> Status {
        if self.break_ready {
            return Status::BreakReady;
        }
        Status::from_parts(self.kind, self.run_state)
    }

    /// Snapshot of the state for drawing.
    #[must_use]
    pub fn screen_state(&self) -> ScreenState {
        let (minutes, seconds) = split_mmss(self.clock.remaining());
        ScreenState {
            minutes,
            seconds,
            status: self.status(),
            kind: self.kind,
            total_seconds: self.context.duration_of(self.kind).total_seconds(),
            remaining_seconds: self.clock.remaining_seconds(),
        }
    }
}
