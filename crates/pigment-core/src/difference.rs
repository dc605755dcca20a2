//! Perceptual color difference and the ΔE → similarity calibration curve.
//!
//! # Algorithm
//! CIE76 ΔE is the Euclidean distance between two L*a*b* colors:
//! ```text
//! ΔE = sqrt(ΔL² + Δa² + Δb²)
//! ```
//! A ΔE around 2.3 is the usual just-noticeable difference.
//!
//! Similarity is a piecewise step function over ΔE, calibrated against CIE76
//! perceptibility thresholds, with a linear tail past the last breakpoint:
//! ```text
//! ΔE == 0  → 100
//! ΔE <= 1  → 99
//! ΔE <= 2  → 95
//! ΔE <= 5  → 90
//! ΔE <= 10 → 80
//! ΔE <= 20 → 60
//! ΔE <= 30 → 40
//! ΔE <= 40 → 20
//! ΔE >  40 → max(0, 10 − (ΔE − 40) / 5)
//! ```
//! Reported scores depend on these exact numbers, so the default curve must
//! not drift. Alternate calibrations can be loaded through [`SimilarityCurve`].

use serde::{Deserialize, Serialize};

use crate::color::Lab;
use crate::error::{Error, Result};

/// CIE76 color difference between two L*a*b* colors.
///
/// Symmetric, and zero iff the two colors are identical.
pub fn delta_e76(lab1: &Lab, lab2: &Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Map a raw ΔE to a 0–100 similarity score using the default calibration.
pub fn similarity_from_delta_e(delta_e: f64) -> f64 {
    evaluate(&DEFAULT_BREAKPOINTS, &DEFAULT_TAIL, delta_e)
}

const DEFAULT_BREAKPOINTS: [Breakpoint; 8] = [
    Breakpoint::new(0.0, 100.0),
    Breakpoint::new(1.0, 99.0),
    Breakpoint::new(2.0, 95.0),
    Breakpoint::new(5.0, 90.0),
    Breakpoint::new(10.0, 80.0),
    Breakpoint::new(20.0, 60.0),
    Breakpoint::new(30.0, 40.0),
    Breakpoint::new(40.0, 20.0),
];

const DEFAULT_TAIL: Tail = Tail {
    start: 40.0,
    base: 10.0,
    divisor: 5.0,
};

fn evaluate(breakpoints: &[Breakpoint], tail: &Tail, delta_e: f64) -> f64 {
    for step in breakpoints {
        if delta_e <= step.max_delta_e {
            return step.similarity;
        }
    }
    // f64::max/min discard NaN, so a NaN ΔE scores 0.
    (tail.base - (delta_e - tail.start) / tail.divisor)
        .max(0.0)
        .min(100.0)
}

/// One step of the calibration curve: every ΔE up to and including
/// `max_delta_e` scores `similarity` (unless an earlier step already matched).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub max_delta_e: f64,
    pub similarity: f64,
}

/// Linear falloff applied beyond the last breakpoint:
/// `max(0, base − (ΔE − start) / divisor)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tail {
    pub start: f64,
    pub base: f64,
    pub divisor: f64,
}

/// Piecewise ΔE → similarity calibration curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityCurve {
    /// Steps sorted by ascending `max_delta_e`.
    pub breakpoints: Vec<Breakpoint>,
    pub tail: Tail,
}

impl Default for SimilarityCurve {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            tail: DEFAULT_TAIL,
        }
    }
}

impl Breakpoint {
    pub const fn new(max_delta_e: f64, similarity: f64) -> Self {
        Self {
            max_delta_e,
            similarity,
        }
    }
}

impl SimilarityCurve {
    /// Evaluate the curve. Always returns a value in [0, 100].
    pub fn similarity(&self, delta_e: f64) -> f64 {
        evaluate(&self.breakpoints, &self.tail, delta_e)
    }

    /// Check the curve is usable: breakpoints strictly ascending in ΔE,
    /// similarity within [0, 100] and non-increasing, tail not rising above
    /// the last step.
    pub fn validate(&self) -> Result<()> {
        if self.tail.divisor <= 0.0 || !self.tail.divisor.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "similarity tail divisor must be positive, got {}",
                self.tail.divisor
            )));
        }

        let mut previous: Option<&Breakpoint> = None;
        for step in &self.breakpoints {
            if !(0.0..=100.0).contains(&step.similarity) {
                return Err(Error::InvalidConfig(format!(
                    "similarity {} at ΔE {} is outside 0..=100",
                    step.similarity, step.max_delta_e
                )));
            }
            if let Some(prev) = previous {
                if step.max_delta_e <= prev.max_delta_e {
                    return Err(Error::InvalidConfig(format!(
                        "breakpoint ΔE {} does not follow {}",
                        step.max_delta_e, prev.max_delta_e
                    )));
                }
                if step.similarity > prev.similarity {
                    return Err(Error::InvalidConfig(format!(
                        "similarity rises from {} to {} at ΔE {}",
                        prev.similarity, step.similarity, step.max_delta_e
                    )));
                }
            }
            previous = Some(step);
        }

        if let Some(last) = previous {
            let tail_peak = self.tail.base - (last.max_delta_e - self.tail.start) / self.tail.divisor;
            if tail_peak > last.similarity {
                return Err(Error::InvalidConfig(format!(
                    "tail starts at {tail_peak}, above the last step's {}",
                    last.similarity
                )));
            }
        }

        Ok(())
    }
}
