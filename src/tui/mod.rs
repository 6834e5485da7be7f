//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, AppEvent, Action, Effect)
//! - `update`: Pure transitions (App, AppEvent) → (App, Effects)
//! - `view`: Pure rendering, App → widgets
//! - `theme`: Style constants
//! - `run`: Effects (terminal, key reader, worker threads)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
