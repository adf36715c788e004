//! Configuration module for card bar display
//!
//! Provides types, parsing and discovery for `cardbar.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;
