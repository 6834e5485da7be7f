//! Configuration: optional TOML file plus command-line overrides.
//!
//! Lookup order (later wins):
//! 1. Built-in defaults
//! 2. `<config_dir>/gh-mutual-follow/config.toml`, or an explicit `--config` path
//! 3. Command-line flags

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Directory name used under the platform config/data dirs.
pub const APP_DIR: &str = "gh-mutual-follow";

/// How long a transient status line stays visible.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub CLI executable.
    pub gh_program: String,
    pub status_timeout_secs: u64,
    /// Filter directive, e.g. "info" or "gh_mutual_follow=debug".
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,
    /// Log destination. None → default file under the data dir.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gh_program: "gh".to_string(),
            status_timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Command-line values that override the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub gh_program: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }

    /// Where logs go: the configured file, else `<data_dir>/gh-mutual-follow/gh-mutual-follow.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_DIR).join("gh-mutual-follow.log")))
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(program) = overrides.gh_program {
            self.gh_program = program;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        self
    }
}

/// Default config file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Load config from `explicit` if given, else from the default location.
///
/// A missing default file yields defaults. A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse TOML text. Missing keys fall back to defaults.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}
