//! Error types.
//!
//! One enum per concern. The TUI stores errors as their rendered message,
//! so every variant carries enough context to stand alone on screen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure talking to the relationship service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The program could not be started at all (not installed, not executable).
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("command '{command}' failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("failed to parse JSON from '{endpoint}': {source}")]
    Parse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not find authenticated user in 'gh auth status' output")]
    UserNotFound,
}

/// Failure of one step of a data load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to get user: {0}")]
    User(#[source] ClientError),

    #[error("failed to get following: {0}")]
    Following(#[source] ClientError),

    #[error("failed to get followers: {0}")]
    Followers(#[source] ClientError),
}

/// Failure loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure installing the log subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Top-level error surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
