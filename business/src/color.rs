//! Color strings as the monitoring backend and the panel options spell them.
//!
//! Accepted forms: `#RGB`, `#RRGGBB`, the same without `#`, `rgb(r, g, b)`
//! and `rgba(r, g, b, a)` where `a` is a float in `0.0..=1.0`.

use egui::Color32;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid rgb color `{0}`")]
    InvalidRgb(String),
}

/// Parses a color string into an egui color.
pub fn parse_color(raw: &str) -> Result<Color32, ColorParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(body) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
    {
        return parse_rgb_body(body, value);
    }

    parse_hex(value.strip_prefix('#').unwrap_or(value), value)
}

fn parse_hex(digits: &str, original: &str) -> Result<Color32, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(original.to_owned());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

    match digits.len() {
        // `#F80` is shorthand for `#FF8800`.
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

fn parse_rgb_body(body: &str, original: &str) -> Result<Color32, ColorParseError> {
    let invalid = || ColorParseError::InvalidRgb(original.to_owned());

    let inner = body.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();

    let (r, g, b) = match parts.as_slice() {
        [r, g, b] | [r, g, b, _] => (*r, *g, *b),
        _ => return Err(invalid()),
    };
    let r = r.parse::<u8>().map_err(|_| invalid())?;
    let g = g.parse::<u8>().map_err(|_| invalid())?;
    let b = b.parse::<u8>().map_err(|_| invalid())?;

    match parts.get(3) {
        Some(alpha) => {
            let alpha = alpha.parse::<f32>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            let alpha = (alpha * 255.0).round() as u8;
            Ok(Color32::from_rgba_unmultiplied(r, g, b, alpha))
        }
        None => Ok(Color32::from_rgb(r, g, b)),
    }
}

/// Serde adapter for record colors.
///
/// A missing, null or unparsable color reads as `None` so that one odd row
/// never rejects the rest of the snapshot.
pub(crate) fn deserialize_lenient_color<'de, D>(
    deserializer: D,
) -> Result<Option<Color32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match parse_color(&raw) {
        Ok(color) => Ok(Some(color)),
        Err(err) => {
            log::warn!("Ignoring record color: {err}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_color("#E97659"), Ok(Color32::from_rgb(0xE9, 0x76, 0x59)));
        assert_eq!(parse_color("890F02"), Ok(Color32::from_rgb(0x89, 0x0F, 0x02)));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_color("#F00"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("f80"), Ok(Color32::from_rgb(0xFF, 0x88, 0x00)));
        assert!(matches!(
            parse_color("#G00"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(
            parse_color("rgb(56, 189, 113)"),
            Ok(Color32::from_rgb(56, 189, 113))
        );
        assert_eq!(
            parse_color("rgba(215,0,0,1)"),
            Ok(Color32::from_rgba_unmultiplied(215, 0, 0, 255))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color("  "), Err(ColorParseError::Empty));
        assert!(matches!(
            parse_color("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            parse_color("rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidRgb(_))
        ));
        assert!(matches!(
            parse_color("rgba(1, 2, 3, 4.5)"),
            Err(ColorParseError::InvalidRgb(_))
        ));
    }
}
