//! Fixed study and break presets offered by the startup menus.

use super::session::SessionTime;

/// A selectable duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerOption {
    /// Menu label
    pub label: &'static str,
    /// Session length
    pub time: SessionTime,
}

impl TimerOption {
    const fn new(label: &'static str, minutes: u32, seconds: u32) -> Self {
        Self {
            label,
            time: SessionTime::new(minutes, seconds),
        }
    }
}

const STUDY_PRESETS: [TimerOption; 2] = [
    TimerOption::new("25:00 (Short Study)", 25, 0),
    TimerOption::new("50:00 (Long Study)", 50, 0),
];

const BREAK_PRESETS: [TimerOption; 2] = [
    TimerOption::new("5:00 (Short Break)", 5, 0),
    TimerOption::new("10:00 (Long Break)", 10, 0),
];

const DEBUG_STUDY: TimerOption = TimerOption::new("0:10 (Debug Study)", 0, 10);
const DEBUG_BREAK: TimerOption = TimerOption::new("0:05 (Debug Break)", 0, 5);

/// Study presets. Debug mode appends a ten second entry.
#[must_use]
pub fn study_options(debug: bool) -> Vec<TimerOption> {
    with_debug(&STUDY_PRESETS, debug.then_some(DEBUG_STUDY))
}

/// Break presets. Debug mode appends a five second entry.
#[must_use]
pub fn break_options(debug: bool) -> Vec<TimerOption> {
    with_debug(&BREAK_PRESETS, debug.then_some(DEBUG_BREAK))
}

fn with_debug(presets: &[TimerOption], extra: Option<TimerOption>) -> Vec<TimerOption> {
    presets.iter().copied().chain(extra).collect()
}

/// Menu labels for a list of options.
#[must_use]
pub fn labels(options: &[TimerOption]) -> Vec<&'static str> {
    options.iter().map(|o| o.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_presets() {
        let study = study_options(false);
        assert_eq!(labels(&study), ["25:00 (Short Study)", "50:00 (Long Study)"]);
        assert_eq!(study[1].time.total_seconds(), 3000);

        let breaks = break_options(false);
        assert_eq!(labels(&breaks), ["5:00 (Short Break)", "10:00 (Long Break)"]);
        assert_eq!(breaks[0].time.total_seconds(), 300);
    }

    #[test]
    fn test_debug_presets_are_appended() {
        let study = study_options(true);
        assert_eq!(study.len(), 3);
        assert_eq!(study[2].label, "0:10 (Debug Study)");
        assert_eq!(study[2].time.total_seconds(), 10);

        let breaks = break_options(true);
        assert_eq!(breaks.len(), 3);
        assert_eq!(breaks[2].time.total_seconds(), 5);
    }
}
