//! Session types shared by the clock and the controller.

use std::fmt;

/// Length of a study or break session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionTime {
    /// Whole minutes
    pub minutes: u32,
    /// Seconds on top of the minutes
    pub seconds: u32,
}

impl SessionTime {
    /// Create a session length from minutes and seconds.
    #[must_use]
    pub const fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    /// Create a session length of whole minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::new(minutes, 0)
    }

    /// Total length in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for SessionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Which half of the Pomodoro cycle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Work period
    Study,
    /// Rest period
    Break,
}

impl SessionKind {
    /// The session that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Study => Self::Break,
            Self::Break => Self::Study,
        }
    }

    /// Check if this is a break.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Study => write!(f, "Study"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// Whether the countdown is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not started, or reset
    #[default]
    Stopped,
    /// Counting down
    Running,
    /// Halted mid-session; resumes where it left off
    Paused,
}

/// Durations picked from the menus. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    /// Study session length
    pub study: SessionTime,
    /// Break session length
    pub break_time: SessionTime,
}

impl SessionContext {
    /// Create a context from the two chosen lengths.
    #[must_use]
    pub const fn new(study: SessionTime, break_time: SessionTime) -> Self {
        Self { study, break_time }
    }

    /// Full length of the given session kind.
    #[must_use]
    pub const fn duration_of(&self, kind: SessionKind) -> SessionTime {
        match kind {
            SessionKind::Study => self.study,
            SessionKind::Break => self.break_time,
        }
    }
}

/// Status line shown under the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Study session not started or reset
    Stopped,
    /// Study session counting down
    Running,
    /// Study session paused
    Paused,
    /// Study finished, break waiting for confirmation
    BreakReady,
    /// Break reset
    BreakStopped,
    /// Break counting down
    BreakRunning,
    /// Break paused
    BreakPaused,
}

impl Status {
    /// Combine the session kind and run state into a status.
    #[must_use]
    pub const fn from_parts(kind: SessionKind, run_state: RunState) -> Self {
        match (kind, run_state) {
            (SessionKind::Study, RunState::Stopped) => Self::Stopped,
            (SessionKind::Study, RunState::Running) => Self::Running,
            (SessionKind::Study, RunState::Paused) => Self::Paused,
            (SessionKind::Break, RunState::Stopped) => Self::BreakStopped,
            (SessionKind::Break, RunState::Running) => Self::BreakRunning,
            (SessionKind::Break, RunState::Paused) => Self::BreakPaused,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::BreakReady => "Break Ready",
            Self::BreakStopped => "Break Stopped",
            Self::BreakRunning => "Break Running",
            Self::BreakPaused => "Break Paused",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
