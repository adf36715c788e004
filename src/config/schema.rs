//! Configuration schema types for `cardbar.toml`
//!
//! Defines the structure and validation rules for bar display configuration.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::{parse_color, COUNT_GOLD};

/// Display switches consulted while selecting asset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rarity-coloured frames and count boxes
    #[serde(default = "default_true")]
    pub rarity_card_frames: bool,
    /// Rarity-coloured mana gems
    #[serde(default = "default_true")]
    pub rarity_card_gems: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { rarity_card_frames: true, rarity_card_gems: true }
    }
}

fn default_true() -> bool {
    true
}

/// Where themes and card art live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per theme
    #[serde(default = "default_themes")]
    pub themes: PathBuf,
    /// Directory of per-card art strips named `<card id>.png`
    #[serde(default = "default_art")]
    pub art: PathBuf,
    /// Active theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { themes: default_themes(), art: default_art(), theme: default_theme() }
    }
}

fn default_themes() -> PathBuf {
    PathBuf::from("Images/Themes/Bars")
}

fn default_art() -> PathBuf {
    PathBuf::from("Images/Bars")
}

fn default_theme() -> String {
    "default".to_string()
}

/// Text styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Hex colour of the copy count
    #[serde(default = "default_count_color")]
    pub count_color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { count_color: default_count_color() }
    }
}

fn default_count_color() -> String {
    "#F0C348".to_string()
}

/// Root of `cardbar.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardBarConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub text: TextConfig,
}

/// Validation error for config fields
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "text.count_color")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cardbar.toml: '{}' {}", self.field, self.message)
    }
}

impl CardBarConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.paths.theme.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "paths.theme".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if let Err(e) = parse_color(&self.text.count_color) {
            errors.push(ConfigValidationError {
                field: "text.count_color".to_string(),
                message: format!("is not a hex colour: {}", e),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Directory of the active theme.
    pub fn theme_dir(&self) -> PathBuf {
        self.paths.themes.join(&self.paths.theme)
    }

    /// Directory of card art strips.
    pub fn art_dir(&self) -> &Path {
        &self.paths.art
    }

    /// Count colour, falling back to gold when the configured value is invalid.
    pub fn count_color(&self) -> Rgba<u8> {
        parse_color(&self.text.count_color).unwrap_or(COUNT_GOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CardBarConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(config, CardBarConfig::default());
        assert!(config.display.rarity_card_frames);
        assert!(config.display.rarity_card_gems);
        assert_eq!(config.theme_dir(), PathBuf::from("Images/Themes/Bars/default"));
        assert_eq!(config.art_dir(), Path::new("Images/Bars"));
        assert_eq!(config.count_color(), COUNT_GOLD);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r##"
[display]
rarity_card_frames = false
rarity_card_gems = true

[paths]
themes = "/opt/bars"
art = "/opt/art"
theme = "frost"

[text]
count_color = "#FFFFFF"
"##;
        let config: CardBarConfig = toml::from_str(toml).expect("config should parse");
        assert!(!config.display.rarity_card_frames);
        assert!(config.display.rarity_card_gems);
        assert_eq!(config.theme_dir(), PathBuf::from("/opt/bars/frost"));
        assert_eq!(config.count_color(), Rgba([255, 255, 255, 255]));
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_display_section() {
        let config: CardBarConfig =
            toml::from_str("[display]\nrarity_card_gems = false\n").expect("config should parse");
        assert!(config.display.rarity_card_frames);
        assert!(!config.display.rarity_card_gems);
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = CardBarConfig::default();
        config.paths.theme = "  ".to_string();
        config.text.count_color = "gold".to_string();

        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "paths.theme");
        assert_eq!(errors[1].field, "text.count_color");
        assert!(errors[1].to_string().starts_with("cardbar.toml: 'text.count_color'"));
        assert_eq!(config.count_color(), COUNT_GOLD);
    }
}
