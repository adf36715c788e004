//! Text colours and hex colour parsing
//!
//! Bar text uses a small fixed palette. Configuration may override the count
//! colour with a hex string in one of these forms:
//! - `#RGB`, `#RGBA`
//! - `#RRGGBB`, `#RRGGBBAA`

use image::Rgba;
use thiserror::Error;

/// Gold used for the copy count digit and its "+" marker.
pub const COUNT_GOLD: Rgba<u8> = Rgba([240, 195, 72, 255]);

/// Fill for cost and name text.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Outline for every text layer.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGBA color.
///
/// Short forms double each digit (`#F00` is `#FF0000`). Alpha defaults to
/// opaque when omitted.
///
/// ```
/// use cardbar::color::{parse_color, COUNT_GOLD};
///
/// assert_eq!(parse_color("#F0C348").unwrap(), COUNT_GOLD);
/// assert_eq!(parse_color("#fff").unwrap(), image::Rgba([255, 255, 255, 255]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, lacks the leading `#`, has the
/// wrong length or contains a non-hex character.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let digits = hex.chars().map(parse_hex_digit).collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0]))
        }
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Format a colour as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}
