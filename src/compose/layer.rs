//! Layer records produced by the bar builder

use image::Rgba;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::color::to_hex;
use crate::geometry::Rect;
use crate::theme::ThemeElement;

/// Where an image layer comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "from", content = "name", rename_all = "snake_case")]
pub enum ImageSource {
    /// A file from the active theme
    Theme(ThemeElement),
    /// Card art strip for the given card id
    CardArt(String),
}

/// An image drawn into a rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePlacement {
    pub source: ImageSource,
    pub path: PathBuf,
    pub rect: Rect,
}

/// A positioned, styled text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPlacement {
    pub text: String,
    pub size: u32,
    pub rect: Rect,
    #[serde(serialize_with = "serialize_color")]
    pub fill: Rgba<u8>,
    #[serde(serialize_with = "serialize_color")]
    pub outline: Rgba<u8>,
    pub centered: bool,
}

/// One entry of the bar's draw list. Later layers draw on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Image(ImagePlacement),
    Text(TextPlacement),
}

impl Layer {
    /// Theme element drawn by this layer, if it is a theme image.
    pub fn element(&self) -> Option<ThemeElement> {
        match self {
            Layer::Image(ImagePlacement { source: ImageSource::Theme(e), .. }) => Some(*e),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePlacement> {
        match self {
            Layer::Image(image) => Some(image),
            Layer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextPlacement> {
        match self {
            Layer::Text(text) => Some(text),
            Layer::Image(_) => None,
        }
    }

    /// Destination rectangle.
    pub fn rect(&self) -> Rect {
        match self {
            Layer::Image(image) => image.rect,
            Layer::Text(text) => text.rect,
        }
    }
}

fn serialize_color<S: Serializer>(color: &Rgba<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(*color))
}
