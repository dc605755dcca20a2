//! sRGB gamma (IEC 61966-2-1) on channel values normalized to [0, 1].
//!
//! ```text
//! decode: V <= 0.04045   → V / 12.92
//!         V >  0.04045   → ((V + 0.055) / 1.055) ^ 2.4
//! encode: L <= 0.0031308 → L × 12.92
//!         L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
//! ```

const DECODE_CUT: f64 = 0.04045;
const ENCODE_CUT: f64 = 0.003_130_8;
const SLOPE: f64 = 12.92;
const GAMMA: f64 = 2.4;

/// Gamma-encoded sRGB channel → linear light.
pub fn srgb_to_linear(encoded: f64) -> f64 {
    if encoded <= DECODE_CUT {
        encoded / SLOPE
    } else {
        ((encoded + 0.055) / 1.055).powf(GAMMA)
    }
}

/// Linear light → gamma-encoded sRGB channel.
pub fn srgb_to_encoded(linear: f64) -> f64 {
    if linear <= ENCODE_CUT {
        linear * SLOPE
    } else {
        1.055 * linear.powf(1.0 / GAMMA) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_srgb_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < EPSILON);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < EPSILON);
        assert!((srgb_to_encoded(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_linear_segment() {
        let v = 0.04;
        assert!((srgb_to_linear(v) - v / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_mid_gray() {
        // sRGB 0.5 decodes to roughly 21.4% linear light.
        let linear = srgb_to_linear(0.5);
        assert!((linear - 0.214_041).abs() < 1e-5, "got {linear}");
    }

    #[test]
    fn test_srgb_roundtrip_samples() {
        for i in 0..=20 {
            let v = i as f64 / 20.0;
            let back = srgb_to_encoded(srgb_to_linear(v));
            assert!((back - v).abs() < 1e-6, "roundtrip mismatch at {v}: {back}");
        }
    }
}
