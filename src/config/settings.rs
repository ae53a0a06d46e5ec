//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. Every field is optional;
//! session lengths are not configurable and always come from the menus.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::PomoError;

/// Longest accepted loop interval. The clock counts sub-second ticks.
pub const MAX_TICK_INTERVAL_US: u64 = 1_000_000;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Event loop settings.
    pub timer: TimerConfig,
    /// Screen settings.
    pub display: DisplayConfig,
    /// Log settings.
    pub log: LogConfig,
}

/// Event loop settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Time between loop iterations, in microseconds.
    #[serde(default = "default_tick_interval_us")]
    pub tick_interval_us: u64,
}

/// Screen settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the progress bar in cells.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

/// Log settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `pomo=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Nothing is logged unless this or `POMO_LOG` is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_tick_interval_us() -> u64 {
    10_000
}

const fn default_bar_width() -> usize {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_us: default_tick_interval_us(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TimerConfig {
    /// Loop interval as a duration.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_micros(self.tick_interval_us)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// holds invalid values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that would stall or break the timer.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<(), PomoError> {
        if self.timer.tick_interval_us == 0 || self.timer.tick_interval_us >= MAX_TICK_INTERVAL_US
        {
            return Err(PomoError::Config(format!(
                "timer.tick_interval_us must be between 1 and {}",
                MAX_TICK_INTERVAL_US - 1
            )));
        }
        if self.display.bar_width == 0 {
            return Err(PomoError::Config(
                "display.bar_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
