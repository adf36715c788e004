//! Layer list output: plain listing and JSON

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::color::to_hex;
use crate::compose::{ImageSource, Layer};

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render layers as a numbered listing, bottom layer first.
///
/// ```text
///  0  image  FadeOverlay          (0, 0) 217x34    themes/dark/fade.png
///  1  text   "5" 22pt centered     (6, 0) 25x34     #FFFFFF/#000000
/// ```
pub fn format_layers(layers: &[Layer]) -> String {
    let mut out = String::new();
    for (i, layer) in layers.iter().enumerate() {
        let line = match layer {
            Layer::Image(image) => {
                let name = match &image.source {
                    ImageSource::Theme(element) => format!("{:?}", element),
                    ImageSource::CardArt(id) => format!("art:{}", id),
                };
                format!(
                    "{:>2}  image  {:<20} {:<16} {}",
                    i,
                    name,
                    image.rect.to_string(),
                    image.path.display()
                )
            }
            Layer::Text(text) => {
                let label = format!(
                    "{:?} {}pt{}",
                    text.text,
                    text.size,
                    if text.centered { " centered" } else { "" }
                );
                format!(
                    "{:>2}  text   {:<20} {:<16} {}/{}",
                    i,
                    label,
                    text.rect.to_string(),
                    to_hex(text.fill),
                    to_hex(text.outline)
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Serialize layers as a pretty-printed JSON array.
pub fn layers_to_json(layers: &[Layer]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(layers)?)
}

/// Write any serializable value as pretty JSON to `path`, creating parent
/// directories.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::compose::{ImagePlacement, TextPlacement};
    use crate::geometry::Rect;
    use crate::theme::ThemeElement;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample() -> Vec<Layer> {
        vec![
            Layer::Image(ImagePlacement {
                source: ImageSource::Theme(ThemeElement::FadeOverlay),
                path: PathBuf::from("themes/dark/fade.png"),
                rect: ThemeElement::FadeOverlay.rect(),
            }),
            Layer::Text(TextPlacement {
                text: "5".to_string(),
                size: 22,
                rect: Rect::new(6.0, 0.0, 25.0, 34.0),
                fill: WHITE,
                outline: BLACK,
                centered: true,
            }),
        ]
    }

    #[test]
    fn test_format_layers() {
        let listing = format_layers(&sample());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 0  image  FadeOverlay"));
        assert!(lines[0].ends_with("themes/dark/fade.png"));
        assert!(lines[1].contains("\"5\" 22pt centered"));
        assert!(lines[1].ends_with("#FFFFFF/#000000"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_layers(&[]), "");
    }

    #[test]
    fn test_layers_to_json() {
        let json = layers_to_json(&sample()).expect("should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[0]["source"]["name"], "fade_overlay");
        assert_eq!(value[1]["text"], "5");
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("out").join("bar.json");
        write_json(&sample(), &path).expect("should write json");
        assert!(path.exists());
    }
}
