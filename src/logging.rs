//! File logging.
//!
//! The timer owns the terminal, so log output goes to a file. Logging is off
//! unless `POMO_LOG` is set or `log.file` is configured; a default run writes
//! nothing to disk.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "POMO_LOG";

/// Build the filter from `POMO_LOG`, falling back to `default_level`.
#[must_use]
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Decide where to log, if anywhere.
///
/// A configured file always wins. Otherwise `default` is used only when
/// `POMO_LOG` is set.
#[must_use]
pub fn log_file(env_set: bool, configured: Option<&Path>, default: &Path) -> Option<PathBuf> {
    match configured {
        Some(path) => Some(path.to_path_buf()),
        None if env_set => Some(default.to_path_buf()),
        None => None,
    }
}

/// Install a global subscriber writing to `path`.
///
/// Logging is best effort: if the file cannot be opened, or a subscriber is
/// already installed, nothing is logged. Returns whether logging is active.
pub fn init(path: &Path, default_level: &str) -> bool {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
