//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod compose;
mod themes;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::loader::{find_config, resolve_path};
use crate::config::{load_config, merge_cli_overrides, CardBarConfig, CliOverrides, ConfigError};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// cardbar - Compute the themed layer stack for card bars
#[derive(Parser)]
#[command(name = "cardbar")]
#[command(about = "cardbar - Compute the themed layer stack for deck tracker card bars")]
#[command(version)]
pub struct Cli {
    /// Path to cardbar.toml (default: search upward, then XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Theme and display options shared by commands
#[derive(Args, Debug, Default, Clone)]
pub struct ThemeArgs {
    /// Directory containing theme subdirectories
    #[arg(long)]
    pub themes: Option<PathBuf>,

    /// Theme name under the themes directory
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Directory of card art strips (<card id>.png)
    #[arg(long)]
    pub art: Option<PathBuf>,

    /// Use default frames and count boxes regardless of rarity
    #[arg(long)]
    pub no_rarity_frames: bool,

    /// Use default gems regardless of rarity
    #[arg(long)]
    pub no_rarity_gems: bool,
}

impl ThemeArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            themes: self.themes.clone(),
            theme: self.theme.clone(),
            art: self.art.clone(),
            rarity_card_frames: self.no_rarity_frames.then_some(false),
            rarity_card_gems: self.no_rarity_gems.then_some(false),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the layer stack for every card in a JSON card file
    Compose {
        /// JSON file holding one card object or an array of cards
        cards: PathBuf,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Write one <card id>.json per card into this directory
        #[arg(short, long, conflicts_with = "json")]
        out: Option<PathBuf>,
    },
    /// Report which theme files are present in a theme directory
    Check {
        /// Theme directory to inspect
        dir: PathBuf,
    },
    /// List installed themes and whether they are usable
    Themes {
        /// Themes root (default: paths.themes from config)
        root: Option<PathBuf>,
    },
}

/// Load configuration and apply command-line overrides.
///
/// Relative paths in a config file resolve against the file's directory.
pub(crate) fn load_settings(
    config: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<CardBarConfig, ConfigError> {
    let config_path = config.map(Path::to_path_buf).or_else(find_config);
    let mut settings = load_config(config_path.as_deref())?;

    if let Some(root) = config_path.as_deref().and_then(Path::parent) {
        settings.paths.themes = resolve_path(root, &settings.paths.themes);
        settings.paths.art = resolve_path(root, &settings.paths.art);
    }

    merge_cli_overrides(&mut settings, overrides);
    Ok(settings)
}

/// Run the CLI
pub fn run() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Compose { cards, theme, json, out } => {
            compose::run_compose(config, &cards, &theme, json, out.as_deref())
        }
        Commands::Check { dir } => themes::run_check(&dir),
        Commands::Themes { root } => themes::run_themes(config, root.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_theme_args_overrides() {
        let args = ThemeArgs {
            theme: Some("frost".to_string()),
            no_rarity_gems: true,
            ..Default::default()
        };
        let overrides = args.overrides();
        assert_eq!(overrides.theme.as_deref(), Some("frost"));
        assert_eq!(overrides.rarity_card_frames, None);
        assert_eq!(overrides.rarity_card_gems, Some(false));
    }

    #[test]
    fn test_parse_compose_args() {
        let cli = Cli::try_parse_from([
            "cardbar",
            "compose",
            "deck.json",
            "--theme",
            "dark",
            "--no-rarity-frames",
            "--json",
        ])
        .expect("should parse");
        match cli.command {
            Commands::Compose { cards, theme, json, out } => {
                assert_eq!(cards, PathBuf::from("deck.json"));
                assert_eq!(theme.theme.as_deref(), Some("dark"));
                assert!(theme.no_rarity_frames);
                assert!(json);
                assert!(out.is_none());
            }
            _ => panic!("expected compose"),
        }
    }

    #[test]
    fn test_load_settings_resolves_relative_to_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join("cardbar.toml");
        fs::write(&config_path, "[paths]\nthemes = \"bars\"\nart = \"/abs/art\"\n")
            .expect("should write config");

        let settings = load_settings(Some(&config_path), &CliOverrides::default())
            .expect("should load settings");
        assert_eq!(settings.paths.themes, temp.path().join("bars"));
        assert_eq!(settings.paths.art, PathBuf::from("/abs/art"));
    }
}
