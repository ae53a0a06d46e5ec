//! Path resolution for pomo configuration and log files.
//!
//! All pomo files live in `~/.pomo/`:
//! - `config.yaml` - Optional configuration file
//! - `pomo.log` - Log output, written only when `POMO_LOG` is set

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomo files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomo/`
    pub root: PathBuf,
    /// Config file: `~/.pomo/config.yaml`
    pub config_file: PathBuf,
    /// Default log file: `~/.pomo/pomo.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var_os("HOME")
            .ok_or_else(|| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomo.log"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomo"))
        })
    }
}
