//! Values derived for the timer screen.

use std::time::Duration;

use super::session::{SessionKind, Status};

/// Everything the terminal needs to paint one frame of the timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// Minutes shown on the clock
    pub minutes: u64,
    /// Seconds shown on the clock
    pub seconds: u64,
    /// Status line
    pub status: Status,
    /// Active session
    pub kind: SessionKind,
    /// Full length of the active session in seconds
    pub total_seconds: u32,
    /// Whole seconds left
    pub remaining_seconds: u32,
}

impl ScreenState {
    /// Fraction of the session that has elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress(self.total_seconds, self.remaining_seconds)
    }

    /// Clock text, as MM:SS.
    #[must_use]
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Split a remaining duration into whole minutes and seconds.
#[must_use]
pub const fn split_mmss(remaining: Duration) -> (u64, u64) {
    let secs = remaining.as_secs();
    (secs / 60, secs % 60)
}

/// Fraction of a session that has elapsed.
///
/// A session with no time left shows as complete once at least one second has
/// elapsed. A zero-length session reports no progress.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress(total_seconds: u32, remaining_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    if remaining_seconds == 0 && elapsed > 0 {
        return 1.0;
    }
    f64::from(elapsed) / f64::from(total_seconds)
}

/// Number of filled cells in a bar `width` cells wide.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn filled_cells(total_seconds: u32, remaining_seconds: u32, width: usize) -> usize {
    if total_seconds == 0 {
        return 0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    if remaining_seconds == 0 && elapsed > 0 {
        return width;
    }
    (u64::from(elapsed) * width as u64 / u64::from(total_seconds)) as usize
}

/// Render a progress bar.
#[must_use]
pub fn render_progress_bar(total_seconds: u32, remaining_seconds: u32, width: usize) -> String {
    let filled = filled_cells(total_seconds, remaining_seconds, width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
