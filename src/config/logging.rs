//! Logging setup
//!
//! Commands log to stderr. The TUI owns the terminal, so it logs to a file in
//! the config directory instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{PocketError, PocketResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "POCKET_LOG";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter from `POCKET_LOG`, falling back to the configured directive
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Can only succeed once per process.
pub fn init_logging(target: LogTarget, fallback_filter: &str) -> PocketResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback_filter))
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    PocketError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| PocketError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_log_directory_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("pocket.log");

        let err = init_logging(LogTarget::File(path), "warn").unwrap_err();
        assert!(matches!(err, PocketError::Io(_)));
    }
}
