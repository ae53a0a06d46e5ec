//! Tick accounting for the active session.
//!
//! The event loop wakes on a fixed interval much shorter than a second. Each
//! wake-up is fed to [`advance`], which collects the interval in a sub-second
//! accumulator and turns every full second into one decrement of the
//! remaining time.

use std::time::Duration;

use super::session::SessionTime;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Remaining time of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickState {
    /// Whole seconds left
    remaining_seconds: u32,
    /// Time collected since the last whole-second decrement
    accumulator: Duration,
}

impl TickState {
    /// Create a state with the given number of seconds left.
    #[must_use]
    pub const fn new(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            accumulator: Duration::ZERO,
        }
    }

    /// Create a state holding the full length of a session.
    #[must_use]
    pub const fn full(time: SessionTime) -> Self {
        Self::new(time.total_seconds())
    }

    /// Whole seconds left.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Sub-second time collected since the last decrement.
    #[must_use]
    pub const fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Time left with the accumulator taken off, never below zero.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::from_secs(u64::from(self.remaining_seconds)).saturating_sub(self.accumulator)
    }

    /// Advance this state in place. Returns true once the session has expired.
    pub fn advance(&mut self, interval: Duration) -> bool {
        let (next, expired) = advance(*self, interval);
        *self = next;
        expired
    }
}

/// Add `interval` to the clock.
///
/// When the accumulator reaches one second it is reduced by one second and a
/// second is taken off the remaining time. If no time is left at that point
/// the session has expired and `true` is returned; the remaining count never
/// goes below zero.
///
/// At most one second is taken off per call, however large the interval.
#[must_use]
pub fn advance(state: TickState, interval: Duration) -> (TickState, bool) {
    let mut next = state;
    next.accumulator += interval;

    if next.accumulator < ONE_SECOND {
        return (next, false);
    }

    next.accumulator -= ONE_SECOND;
    if next.remaining_seconds == 0 {
        return (next, true);
    }

    next.remaining_seconds -= 1;
    (next, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_micros(10_000);

    /// Feed one second worth of ticks. Returns how many reported expiry.
    fn one_second(state: &mut TickState) -> usize {
        (0..100).filter(|_| state.advance(TICK)).count()
    }

    #[test]
    fn test_sub_second_ticks_only_accumulate() {
        let (state, expired) = advance(TickState::new(5), TICK);
        assert!(!expired);
        assert_eq!(state.remaining_seconds(), 5);
        assert_eq!(state.accumulator(), TICK);
    }

    #[test]
    fn test_full_second_decrements_once() {
        let mut state = TickState::new(5);
        assert_eq!(one_second(&mut state), 0);
        assert_eq!(state.remaining_seconds(), 4);
        assert_eq!(state.accumulator(), Duration::ZERO);
    }

    #[test]
    fn test_counts_down_to_zero_then_expires() {
        for n in [1_u32, 3, 10] {
            let mut state = TickState::new(n);
            for _ in 0..n {
                assert_eq!(one_second(&mut state), 0);
            }
            assert_eq!(state.remaining_seconds(), 0);

            assert_eq!(one_second(&mut state), 1);
            assert_eq!(state.remaining_seconds(), 0);
        }
    }

    #[test]
    fn test_expiry_does_not_go_negative() {
        let (state, expired) = advance(TickState::new(0), ONE_SECOND);
        assert!(expired);
        assert_eq!(state.remaining_seconds(), 0);
    }

    #[test]
    fn test_large_interval_takes_one_second_only() {
        let (state, expired) = advance(TickState::new(10), Duration::from_secs(3));
        assert!(!expired);
        assert_eq!(state.remaining_seconds(), 9);
        assert_eq!(state.accumulator(), Duration::from_secs(2));
    }

    #[test]
    fn test_accumulator_stays_below_one_second() {
        let intervals = [
            TICK,
            Duration::from_millis(333),
            Duration::from_micros(999_999),
        ];
        for interval in intervals {
            let mut state = TickState::new(30);
            for _ in 0..200 {
                state.advance(interval);
                assert!(state.accumulator() < ONE_SECOND, "{interval:?}");
            }
        }
    }

    #[test]
    fn test_sub_second_interval_keeps_clock_in_step() {
        // 999_999 µs per tick: 25 ticks are just under 25 s of wall time
        let mut state = TickState::new(1_500);
        for _ in 0..25 {
            state.advance(Duration::from_micros(999_999));
        }
        assert_eq!(state.remaining_seconds(), 1_476);
        assert_eq!(state.remaining(), Duration::from_micros(1_475_000_025));
    }

    #[test]
    fn test_remaining_subtracts_accumulator() {
        let mut state = TickState::full(SessionTime::new(0, 10));
        state.advance(TICK);
        assert_eq!(state.remaining(), Duration::from_millis(9_990));

        let (done, _) = advance(TickState::new(0), Duration::from_millis(500));
        assert_eq!(done.remaining(), Duration::ZERO);
    }
}
