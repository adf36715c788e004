//! Configuration loading and discovery for `cardbar.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::CardBarConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery.
pub const CONFIG_FILE: &str = "cardbar.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse cardbar.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the themes root
    pub themes: Option<PathBuf>,
    /// Override the active theme name
    pub theme: Option<String>,
    /// Override the card art directory
    pub art: Option<PathBuf>,
    /// Force rarity frames on or off
    pub rarity_card_frames: Option<bool>,
    /// Force rarity gems on or off
    pub rarity_card_gems: Option<bool>,
}

/// Find cardbar.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for cardbar.toml
/// 2. Check XDG_CONFIG_HOME/cardbar/cardbar.toml (or ~/.config/cardbar/cardbar.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find cardbar.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("cardbar").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find cardbar.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a cardbar.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("deck-tracker/cardbar.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<CardBarConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(CardBarConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<CardBarConfig, ConfigError> {
    log::debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: CardBarConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut CardBarConfig, overrides: &CliOverrides) {
    if let Some(ref themes) = overrides.themes {
        config.paths.themes = themes.clone();
    }
    if let Some(ref theme) = overrides.theme {
        config.paths.theme = theme.clone();
    }
    if let Some(ref art) = overrides.art {
        config.paths.art = art.clone();
    }
    if let Some(frames) = overrides.rarity_card_frames {
        config.display.rarity_card_frames = frames;
    }
    if let Some(gems) = overrides.rarity_card_gems {
        config.display.rarity_card_gems = gems;
    }
}

/// Resolve a path relative to the directory holding the config file.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(config_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_root.join(path)
    }
}
