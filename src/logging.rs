//! Structured logging via `tracing`.
//!
//! The TUI owns stdout/stderr while it runs, so events are written to a
//! file only. `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::LogError;

/// Build the filter: `RUST_LOG` if set, else `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|_| LogError::InvalidLevel(level.to_string())),
    }
}

/// Install the global subscriber, appending to `path`.
///
/// With no path, logging stays disabled and events are dropped.
pub fn init_logging(level: &str, path: Option<&Path>) -> Result<(), LogError> {
    let Some(path) = path else {
        return Ok(());
    };

    let filter = env_filter(level)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| LogError::File {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::File {
            path: path.to_path_buf(),
            source,
        })?;

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_target(true)
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(log_level = %level, log_file = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_level() {
        // Only meaningful when RUST_LOG isn't steering the filter
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(
                env_filter("gh_mutual_follow=loud"),
                Err(LogError::InvalidLevel(_))
            ));
        }
    }

    #[test]
    fn accepts_directives() {
        assert!(env_filter("gh_mutual_follow=debug,warn").is_ok());
    }

    #[test]
    fn no_path_is_a_noop() {
        assert!(init_logging("info", None).is_ok());
    }
}
