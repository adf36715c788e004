//! cardbar - Layer selection for themed deck tracker card bars
//!
//! This library computes, for one card, the ordered list of image and text
//! layers that make up its bar in a given theme:
//! - Probe a theme directory for its required and rarity-variant assets
//! - Select frame, gem and count box variants from rarity and display settings
//! - Emit layers in draw order for an external rasterizer
//!
//! Themes missing any required asset yield an empty layer list.

pub mod card;
pub mod cli;
pub mod color;
pub mod compose;
pub mod config;
pub mod geometry;
pub mod output;
pub mod select;
pub mod theme;

pub use card::{Card, Rarity};
pub use compose::{CardBarBuilder, Layer};
pub use config::DisplayConfig;
