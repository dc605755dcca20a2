//! Pigment Core — perceptual color matching against a paint catalog.
//!
//! Converts hex colors to CIE L*a*b*, ranks catalog paints by CIE76 ΔE, and
//! resolves named paint sets to catalog entries with brand-aware fuzzy name
//! matching. Everything here is synchronous and pure: the catalog is borrowed
//! read-only for each call, so calls can run in parallel without coordination.

pub mod catalog;
pub mod color;
pub mod config;
pub mod difference;
pub mod error;
pub mod matching;

// Re-exports for convenience.
pub use catalog::{LabCatalog, Paint, PaintSet, PaintType};
pub use color::{Lab, Rgb, hex_to_lab, hex_to_rgb};
pub use config::MatchConfig;
pub use difference::{SimilarityCurve, delta_e76, similarity_from_delta_e};
pub use error::{Error, HexErrorKind, Result};
pub use matching::{
    ColorSample, PaintMatch, ResolvedPaintSet, brands_match, find_matches_by_role,
    find_matching_paints, resolve_paint_set,
};
