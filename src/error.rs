//! Error types for pomo.

use thiserror::Error;

/// Errors that can stop the timer.
///
/// Nothing here is recoverable mid-run: every variant ends the program with a
/// message and a non-zero exit code.
#[derive(Debug, Error)]
pub enum PomoError {
    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The configuration file is unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PomoError {
    /// Wrap an I/O failure that happened while talking to the terminal.
    #[must_use]
    pub fn terminal(context: &str, err: &std::io::Error) -> Self {
        Self::Terminal(format!("{context}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err = PomoError::terminal("Failed to enable raw mode", &io);
        assert_eq!(
            err.to_string(),
            "Terminal error: Failed to enable raw mode: no tty"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PomoError = io.into();
        assert_eq!(err.to_string(), "missing");
    }
}
