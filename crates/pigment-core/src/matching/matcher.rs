//! Ranking catalog paints by perceptual distance to a target color.
//!
//! # Algorithm
//! 1. Convert the target hex to L*a*b* once
//! 2. Compute CIE76 ΔE to every indexed catalog entry
//! 3. Stable-sort ascending by ΔE (ties keep catalog order)
//! 4. Truncate to the requested count and attach similarity scores
//!
//! # Complexity
//! O(N log N) per target for a catalog of N paints. Reuse a [`LabCatalog`]
//! across targets to avoid converting the catalog more than once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{LabCatalog, Paint};
use crate::color::{Lab, hex_to_lab};
use crate::config::MatchConfig;
use crate::difference::{SimilarityCurve, delta_e76};
use crate::error::Result;
use crate::matching::brands::{normalize_key, normalized_brands_match};

/// Default number of results returned by [`find_matching_paints`].
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Default number of results per color in [`find_matches_by_role`].
pub const DEFAULT_MATCHES_PER_COLOR: usize = 3;
/// Role assigned to a color sample that carries none.
pub const DEFAULT_ROLE: &str = "general";

/// One ranked catalog paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintMatch<'a> {
    pub paint: &'a Paint,
    /// 0–100, 100 = identical.
    pub similarity: f64,
    /// Raw CIE76 distance, 0 = identical.
    #[serde(rename = "deltaE")]
    pub delta_e: f64,
}

/// A target color with an optional role label (base, highlight, shadow, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSample {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ColorSample {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            location: None,
        }
    }

    pub fn with_role(hex: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            location: Some(role.into()),
        }
    }
}

/// Filters applied while ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    pub max_results: usize,
    /// Only consider paints whose brand matches one of these. Empty = all brands.
    pub brands: Vec<String>,
    /// Drop candidates farther than this ΔE.
    pub max_delta_e: Option<f64>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            brands: Vec::new(),
            max_delta_e: None,
        }
    }
}

impl MatchOptions {
    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            max_results,
            ..Self::default()
        }
    }
}

impl<'a> LabCatalog<'a> {
    /// Rank indexed paints against a target L*a*b* color.
    pub fn rank(
        &self,
        target: &Lab,
        options: &MatchOptions,
        curve: &SimilarityCurve,
    ) -> Vec<PaintMatch<'a>> {
        if self.is_empty() || options.max_results == 0 {
            return Vec::new();
        }

        let brand_keys: Vec<String> = options.brands.iter().map(|b| normalize_key(b)).collect();

        let mut scored: Vec<(&'a Paint, f64)> = self
            .entries
            .iter()
            .filter(|(paint, _)| {
                brand_keys.is_empty() || {
                    let key = normalize_key(&paint.brand);
                    brand_keys.iter().any(|b| normalized_brands_match(b, &key))
                }
            })
            .map(|(paint, lab)| (*paint, delta_e76(target, lab)))
            .filter(|(_, de)| options.max_delta_e.is_none_or(|max| *de <= max))
            .collect();

        // `sort_by` is stable, so equal distances keep catalog order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(options.max_results);

        scored
            .into_iter()
            .map(|(paint, delta_e)| PaintMatch {
                paint,
                similarity: curve.similarity(delta_e),
                delta_e,
            })
            .collect()
    }

    /// Rank indexed paints against a target hex color.
    pub fn rank_hex(
        &self,
        target_hex: &str,
        options: &MatchOptions,
        curve: &SimilarityCurve,
    ) -> Result<Vec<PaintMatch<'a>>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let target = hex_to_lab(target_hex)?;
        Ok(self.rank(&target, options, curve))
    }
}

/// Find the `max_results` catalog paints closest to `target_hex`.
///
/// Returns an empty list for an empty catalog without looking at the target.
/// Catalog entries with malformed hex colors are skipped. A malformed target
/// is an [`Error::InvalidColorFormat`](crate::Error::InvalidColorFormat).
pub fn find_matching_paints<'a>(
    target_hex: &str,
    catalog: &'a [Paint],
    max_results: usize,
) -> Result<Vec<PaintMatch<'a>>> {
    if catalog.is_empty() {
        return Ok(Vec::new());
    }
    let target = hex_to_lab(target_hex)?;
    let matches = LabCatalog::new(catalog).rank(
        &target,
        &MatchOptions::with_max_results(max_results),
        &SimilarityCurve::default(),
    );
    tracing::debug!(
        "matched {target_hex} against {} paints, {} results",
        catalog.len(),
        matches.len()
    );
    Ok(matches)
}

/// The single closest catalog paint, if any.
pub fn closest_paint<'a>(target_hex: &str, catalog: &'a [Paint]) -> Result<Option<PaintMatch<'a>>> {
    Ok(find_matching_paints(target_hex, catalog, 1)?.into_iter().next())
}

/// Match each color sample independently and group results by role.
///
/// Samples without a `location` use the `"general"` role. When several samples
/// share a role, the later sample's matches replace the earlier ones.
pub fn find_matches_by_role<'a>(
    colors: &[ColorSample],
    catalog: &'a [Paint],
    matches_per_color: usize,
) -> Result<BTreeMap<String, Vec<PaintMatch<'a>>>> {
    let config = MatchConfig {
        matches_per_color,
        ..MatchConfig::default()
    };
    find_matches_by_role_with(colors, &LabCatalog::new(catalog), &config)
}

/// [`find_matches_by_role`] against a prebuilt index and an explicit config.
pub fn find_matches_by_role_with<'a>(
    colors: &[ColorSample],
    catalog: &LabCatalog<'a>,
    config: &MatchConfig,
) -> Result<BTreeMap<String, Vec<PaintMatch<'a>>>> {
    let options = MatchOptions::with_max_results(config.matches_per_color);
    let mut by_role = BTreeMap::new();

    for sample in colors {
        let role = sample
            .location
            .clone()
            .unwrap_or_else(|| config.default_role.clone());
        let matches = catalog.rank_hex(&sample.hex, &options, &config.similarity)?;
        if by_role.insert(role.clone(), matches).is_some() {
            tracing::debug!("role {role:?} matched twice, keeping the later color {}", sample.hex);
        }
    }

    Ok(by_role)
}
