//! File-based logging initialization.
//!
//! Called once by the embedding shell before the [`crate::app::App`] is
//! created. Log output goes to a daily-rotated file so a UI shell never has
//! its stdout polluted; the filter comes from `RUST_LOG`, then `DUNAB_LOG`,
//! then a quiet default.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "dunab-client.log";
const DEFAULT_FILTER: &str = "client=info,shared=info,warn";

/// Directory the log files are written to, `DUNAB_LOG_DIR` or `./logs`.
pub fn log_dir() -> PathBuf {
    std::env::var("DUNAB_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Initialize the logging system.
///
/// Sets up a daily-rotated log file with non-blocking writes. Safe to call
/// only once per process; a second call is a no-op because the global
/// subscriber is already installed.
pub fn init() {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: failed to create log directory {:?}: {}", dir, e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| match std::env::var("DUNAB_LOG") {
            Ok(spec) if !spec.is_empty() => EnvFilter::try_new(spec),
            _ => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        // Subscriber already installed (tests, embedding shell).
        return;
    }

    tracing::info!(log_dir = %dir.display(), "Logging initialized");

    // The guard flushes buffered lines on drop; it must live as long as the
    // process does.
    std::mem::forget(guard);
}
