//! Card value object consumed by the bar builder

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Card rarity. Drives rarity-variant asset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Free,
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    /// Anything unrecognised.
    Invalid,
}

impl Rarity {
    pub const ALL: [Rarity; 6] =
        [Rarity::Free, Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary, Rarity::Invalid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Free => "free",
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Invalid => "invalid",
        }
    }
}

impl From<String> for Rarity {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "free" => Rarity::Free,
            "common" => Rarity::Common,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            _ => Rarity::Invalid,
        }
    }
}

impl From<Rarity> for String {
    fn from(r: Rarity) -> Self {
        r.as_str().to_string()
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card as seen by the bar builder.
///
/// `count` is signed: zero or negative means the card is not owned or has
/// been used up. `is_frame_highlighted` is written by the builder on every
/// build and reports whether the golden frame was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cost: i32,
    #[serde(default = "default_count")]
    pub count: i32,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub is_created: bool,
    #[serde(default)]
    pub jousted: bool,
    #[serde(default)]
    pub highlight_frame: bool,
    #[serde(default)]
    pub is_frame_highlighted: bool,
}

fn default_count() -> i32 {
    1
}

impl Card {
    /// Create a single-copy common card with no flags set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            count: 1,
            rarity: Rarity::Common,
            is_created: false,
            jousted: false,
            highlight_frame: false,
            is_frame_highlighted: false,
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn created(mut self) -> Self {
        self.is_created = true;
        self
    }

    pub fn jousted(mut self) -> Self {
        self.jousted = true;
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight_frame = true;
        self
    }
}

/// Error reading card definitions from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardError {
    #[error("Failed to read cards: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse cards: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CardFile {
    One(Card),
    Many(Vec<Card>),
}

/// Parse one card object or an array of cards from JSON text.
pub fn parse_cards(json: &str) -> Result<Vec<Card>, CardError> {
    Ok(match serde_json::from_str::<CardFile>(json)? {
        CardFile::One(card) => vec![card],
        CardFile::Many(cards) => cards,
    })
}

/// Read cards from a JSON file holding either one card or an array.
pub fn load_cards(path: &Path) -> Result<Vec<Card>, CardError> {
    let contents = fs::read_to_string(path)?;
    parse_cards(&contents)
}
