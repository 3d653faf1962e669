//! Diagnostic logging setup
//!
//! The filter comes from `EXPENSE_TRACKER_LOG` when set, otherwise from the
//! `log_level` setting. Command-line runs log to stderr; the TUI logs to a
//! file because it owns the terminal.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
pub fn init_cli_logging(settings: &Settings) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(stderr_log)
        .try_init();
}

/// Log to the debug log file under the base directory
pub fn init_file_logging(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    paths.ensure_directories()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.debug_log())
        .map_err(|e| TrackerError::Io(format!("Failed to open log file: {}", e)))?;

    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    let _ = tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(file_log)
        .try_init();

    Ok(())
}
