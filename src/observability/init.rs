//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` fmt pipeline writing to a rotating log file,
//! keeping the interactive terminal free of log output.

use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RollingFile;
use crate::Config;

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG`, when set and valid
/// 2. `config.trace_level`
/// 3. `"info"` if neither parses
///
/// # Initialization Behavior
///
/// - Creates the log file's directory if it doesn't exist
/// - Silently returns if the directory cannot be created (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// Returns `true` when this call installed the subscriber.
pub fn init_tracing(config: &Config) -> bool {
    let log_file = config.log_file_path();
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.trace_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_ansi(false)
        .with_thread_names(true)
        .with_target(true)
        .with_writer(Mutex::new(RollingFile::new(log_file)));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
