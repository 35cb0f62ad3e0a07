//! Color parsing
//!
//! Palettes are declared as the strings a designer writes: `#rrggbb` hex
//! codes, short `#rgb` codes, or a handful of named colors. Parsing happens
//! once, when a consumer takes colors out of a palette.

use plotters::style::RGBColor;

use super::PaletteError;

/// Named colors accepted by [`parse_color`] (web/matplotlib base values)
const NAMED_COLORS: &[(&str, RGBColor)] = &[
    ("red", RGBColor(255, 0, 0)),
    ("blue", RGBColor(0, 0, 255)),
    ("green", RGBColor(0, 128, 0)),
    ("black", RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255)),
    ("gray", RGBColor(128, 128, 128)),
    ("grey", RGBColor(128, 128, 128)),
    ("orange", RGBColor(255, 165, 0)),
];

/// Parse a color specification into an RGB color
///
/// # Example
///
/// ```rust
/// use plotters::style::RGBColor;
/// use visual_principles::palette::parse_color;
///
/// assert_eq!(parse_color("#1f77b4").unwrap(), RGBColor(0x1f, 0x77, 0xb4));
/// assert_eq!(parse_color("red").unwrap(), RGBColor(255, 0, 0));
/// assert!(parse_color("#12").is_err());
/// ```
pub fn parse_color(spec: &str) -> Result<RGBColor, PaletteError> {
    let trimmed = spec.trim();
    let invalid = || PaletteError::InvalidColor(spec.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        return match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc == #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(RGBColor(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        };
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, color)| *color)
        .ok_or_else(invalid)
}

/// Format a color back to `#rrggbb`
pub fn to_hex(color: &RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}
