//! gh-mutual-follow: find and fix one-sided GitHub follow relationships.

pub mod config;
pub mod error;
pub mod github;
pub mod loader;
pub mod logging;
pub mod relations;
pub mod report;
pub mod tui;
pub mod types;
