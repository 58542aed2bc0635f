//! File-based logging.
//!
//! The TUI owns the terminal, so tracing output goes to `liftclock.log` in the
//! data directory. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::paths;

fn filter_for(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("liftclock={}", config.level)))
}

/// Install the global subscriber. Logging is disabled if the file can't be opened.
pub fn init(config: &LogConfig) {
    let path = paths::log_file();
    let file = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let file = match file {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}, logging disabled", path.display());
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        tracing::info!(log_file = %path.display(), level = %config.level, "logging initialized");
    }
}
