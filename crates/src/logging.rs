//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the table, so logs only go to a file and only when
//! one is requested with `--log-file`. The level filter comes from
//! `PTABLE_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use crate::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PTABLE_LOG";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to `path` (appending).
pub fn init_file_logging(path: &Path) -> Result<(), Error> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
