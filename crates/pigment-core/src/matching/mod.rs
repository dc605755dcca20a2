//! Paint matching: color ranking, paint-set resolution, and brand equivalence.

pub mod brands;
pub mod matcher;
pub mod resolver;

pub use brands::{BRAND_EQUIVALENTS, brands_match, canonical_brand, normalize_key};
pub use matcher::{
    ColorSample, MatchOptions, PaintMatch, closest_paint, find_matches_by_role,
    find_matches_by_role_with, find_matching_paints,
};
pub use resolver::{PaintIndex, ResolvedPaintSet, resolve_paint_set, resolve_paint_sets};
