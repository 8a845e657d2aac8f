use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown category `{0}` (try `ptable categories`)")]
    UnknownCategory(String),

    #[error("no element matches `{0}`")]
    UnknownElement(String),

    #[error(transparent)]
    Prefs(#[from] PrefsError),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Logging(String),

    #[error("terminal program failed: {0}")]
    Program(String),
}

/// Failures reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("no configuration directory available for this user")]
    NoConfigDir,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preference file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
