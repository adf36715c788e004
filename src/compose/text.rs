//! Outlined text layout seam
//!
//! Glyph shaping and outline drawing belong to the host renderer. The builder
//! only describes what to write where and appends whatever placements the
//! layout helper returns.

use image::Rgba;

use super::layer::TextPlacement;
use crate::geometry::Rect;

/// Styling for one text call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: u32,
    pub fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub centered: bool,
}

/// Turns a string into positioned, outlined text placements.
pub trait TextLayout: Send + Sync {
    /// Lay out `text` in `rect`. May return several placements (for example
    /// an outline pass followed by a fill pass) or none at all.
    fn outlined_text(&self, text: &str, rect: Rect, style: &TextStyle) -> Vec<TextPlacement>;
}

/// Emits exactly one placement per call carrying the full style.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlinedText;

impl TextLayout for OutlinedText {
    fn outlined_text(&self, text: &str, rect: Rect, style: &TextStyle) -> Vec<TextPlacement> {
        vec![TextPlacement {
            text: text.to_string(),
            size: style.size,
            rect,
            fill: style.fill,
            outline: style.outline,
            centered: style.centered,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    const STYLE: TextStyle = TextStyle { size: 14, fill: WHITE, outline: BLACK, centered: false };

    #[test]
    fn test_single_placement() {
        let out = OutlinedText.outlined_text("Leeroy", Rect::new(38.0, 8.0, 141.0, 34.0), &STYLE);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Leeroy");
        assert_eq!(out[0].size, 14);
        assert!(!out[0].centered);
    }

    #[test]
    fn test_empty_text_still_placed() {
        let out = OutlinedText.outlined_text("", Rect::default(), &STYLE);
        assert_eq!(out.len(), 1);
        assert!(out[0].text.is_empty());
    }
}
