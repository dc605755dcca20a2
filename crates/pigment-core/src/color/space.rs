//! CIE XYZ (D65) and CIE L*a*b* color spaces and the 3x3 matrix transforms
//! between them and linear sRGB.
//!
//! XYZ is expressed on the 0–100 scale (Y of reference white = 100).

use serde::{Deserialize, Serialize};

use super::hex::Rgb;
use super::transfer::{srgb_to_encoded, srgb_to_linear};

/// D65 reference white in XYZ, 2° observer.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.000,
    z: 108.883,
};

/// CIE Lab nonlinearity threshold (216/24389, rounded as published).
const EPSILON: f64 = 0.008856;
/// CIE Lab linear-segment slope (24389/27, rounded as published).
const KAPPA: f64 = 903.3;

/// Linear sRGB (0–100) → XYZ, D65.
pub const SRGB_TO_XYZ: ColorMatrix = ColorMatrix([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// XYZ, D65 → linear sRGB (0–100).
pub const XYZ_TO_SRGB: ColorMatrix = ColorMatrix([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Apply this matrix to a column vector.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

/// A CIE XYZ tristimulus value on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A CIE L*a*b* color. Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// 8-bit sRGB → XYZ (D65).
///
/// Normalizes channels, removes the sRGB gamma, scales to 0–100 and applies
/// [`SRGB_TO_XYZ`].
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = rgb.to_unit().map(|c| srgb_to_linear(c) * 100.0);
    let [x, y, z] = SRGB_TO_XYZ.apply(linear);
    Xyz { x, y, z }
}

/// XYZ (D65) → 8-bit sRGB. Out-of-gamut values are clamped.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let linear = XYZ_TO_SRGB.apply([xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0]);
    Rgb::from_unit(linear.map(|c| srgb_to_encoded(c.max(0.0))))
}

/// XYZ (D65) → L*a*b*.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// L*a*b* → XYZ (D65).
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    Xyz {
        x: lab_f_inv(fx) * D65_WHITE.x,
        y: lab_f_inv(fy) * D65_WHITE.y,
        z: lab_f_inv(fz) * D65_WHITE.z,
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}
