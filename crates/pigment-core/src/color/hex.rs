//! Hex color strings and 8-bit sRGB triplets.
//!
//! Accepted format is `RRGGBB`, optionally prefixed with `#`, case-insensitive.
//! Anything else is rejected with [`Error::InvalidColorFormat`] rather than
//! being coerced into a wrong color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, HexErrorKind, Result};

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to [0, 1].
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Build from normalized channels, clamping to [0, 1] and rounding.
    pub fn from_unit(unit: [f64; 3]) -> Self {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(quantize(unit[0]), quantize(unit[1]), quantize(unit[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

/// Parse a hex color string into an [`Rgb`].
///
/// Accepts exactly six hex digits after an optional leading `#`. Surrounding
/// whitespace is rejected.
///
/// ```
/// use pigment_core::color::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), Rgb::WHITE);
/// assert_eq!(hex_to_rgb("1a2B3c").unwrap(), Rgb::new(0x1A, 0x2B, 0x3C));
/// assert!(hex_to_rgb("#FFF").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() {
        return Err(Error::hex(hex, HexErrorKind::Empty));
    }

    let count = digits.chars().count();
    if count != 6 {
        return Err(Error::hex(hex, HexErrorKind::InvalidLength(count)));
    }

    let mut nibbles = [0u8; 6];
    for (slot, c) in nibbles.iter_mut().zip(digits.chars()) {
        *slot = c
            .to_digit(16)
            .ok_or_else(|| Error::hex(hex, HexErrorKind::InvalidDigit(c)))? as u8;
    }

    Ok(Rgb::new(
        nibbles[0] << 4 | nibbles[1],
        nibbles[2] << 4 | nibbles[3],
        nibbles[4] << 4 | nibbles[5],
    ))
}

/// Format an [`Rgb`] as `#RRGGBB` (uppercase).
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}
