//! Error types shared across the app.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading `cinerow.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failure talking to the webview (fullscreen, clipboard, scroll metrics).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShellError {
    #[error("webview bridge error: {0}")]
    Bridge(String),
    #[error("unexpected bridge payload: {0}")]
    Payload(String),
}
