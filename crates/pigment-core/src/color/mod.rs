//! Color space conversions: hex ↔ sRGB ↔ linear RGB ↔ CIE XYZ (D65) ↔ CIE L*a*b*.

pub mod hex;
pub mod space;
pub mod transfer;

pub use hex::{Rgb, hex_to_rgb, rgb_to_hex};
pub use space::{ColorMatrix, D65_WHITE, Lab, Xyz, lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};

use crate::error::Result;

/// Convert a hex color string straight to L*a*b*.
///
/// This is the single conversion the matchers use. It is deterministic and
/// fails only on malformed hex input.
pub fn hex_to_lab(hex: &str) -> Result<Lab> {
    hex_to_rgb(hex).map(rgb_to_lab)
}

/// 8-bit sRGB → L*a*b*.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// L*a*b* → nearest 8-bit sRGB, clamped to gamut.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// L*a*b* → `#RRGGBB`.
pub fn lab_to_hex(lab: Lab) -> String {
    rgb_to_hex(lab_to_rgb(lab))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.1;

    #[test]
    fn test_hex_to_lab_white() {
        let lab = hex_to_lab("#FFFFFF").unwrap();
        assert!((lab.l - 100.0).abs() < TOLERANCE, "L = {}", lab.l);
        assert!(lab.a.abs() < TOLERANCE, "a = {}", lab.a);
        assert!(lab.b.abs() < TOLERANCE, "b = {}", lab.b);
    }

    #[test]
    fn test_hex_to_lab_black() {
        let lab = hex_to_lab("000000").unwrap();
        assert!(lab.l.abs() < TOLERANCE);
        assert!(lab.a.abs() < TOLERANCE);
        assert!(lab.b.abs() < TOLERANCE);
    }

    #[test]
    fn test_hex_to_lab_rejects_malformed() {
        assert!(hex_to_lab("#12345").is_err());
        assert!(hex_to_lab("not a color").is_err());
    }

    #[test]
    fn test_hex_to_lab_is_deterministic() {
        assert_eq!(hex_to_lab("#7F3A99").unwrap(), hex_to_lab("#7f3a99").unwrap());
    }

    #[test]
    fn test_lab_to_hex_roundtrip() {
        for hex in ["#FF0000", "#123456", "#C0FFEE", "#000000", "#FFFFFF"] {
            assert_eq!(lab_to_hex(hex_to_lab(hex).unwrap()), hex);
        }
    }
}
