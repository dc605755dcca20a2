//! Resolving a named paint set against the catalog.
//!
//! Each paint name is tried against three tiers, stopping at the first hit:
//! 1. exact `brand + name` key
//! 2. name-only key, accepted if the found paint's brand is compatible
//! 3. substring match (either direction) among catalog paints of a
//!    compatible brand, first hit in catalog order
//!
//! Keys are [`normalize_key`] forms. Both lookup indexes keep the first
//! catalog entry on collision. Names are resolved independently; no name's
//! result influences another's.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{Paint, PaintSet};
use crate::matching::brands::{normalize_key, normalized_brands_match};

/// Outcome of resolving one [`PaintSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaintSet<'a> {
    pub set: &'a PaintSet,
    /// Matched paints in the order their names resolved.
    pub matched_paints: Vec<&'a Paint>,
    /// Original (non-normalized) names that found no paint.
    pub unmatched_names: Vec<&'a str>,
    /// `matched / total × 100`, or 0 for a set with no names.
    pub match_rate: f64,
}

/// Which lookup resolved a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTier {
    Exact,
    NameOnly,
    Fuzzy,
}

/// Lookup indexes over a catalog, built once and reused across sets.
#[derive(Debug, Clone)]
pub struct PaintIndex<'a> {
    catalog: &'a [Paint],
    by_brand_and_name: HashMap<String, &'a Paint>,
    by_name: HashMap<String, &'a Paint>,
}

impl<'a> PaintIndex<'a> {
    pub fn new(catalog: &'a [Paint]) -> Self {
        let mut by_brand_and_name = HashMap::with_capacity(catalog.len());
        let mut by_name = HashMap::with_capacity(catalog.len());

        for paint in catalog {
            let composite = normalize_key(&format!("{} {}", paint.brand, paint.name));
            by_brand_and_name.entry(composite).or_insert(paint);
            by_name.entry(normalize_key(&paint.name)).or_insert(paint);
        }

        Self {
            catalog,
            by_brand_and_name,
            by_name,
        }
    }

    /// Resolve every name in `set`.
    pub fn resolve(&self, set: &'a PaintSet) -> ResolvedPaintSet<'a> {
        let brand_key = normalize_key(&set.brand);
        let mut same_brand: Option<Vec<(String, &'a Paint)>> = None;

        let mut matched_paints = Vec::new();
        let mut unmatched_names = Vec::new();

        for name in &set.paint_names {
            match self.resolve_name(&set.brand, &brand_key, name, &mut same_brand) {
                Some((paint, tier)) => {
                    tracing::trace!("{name:?} -> {} {} ({tier:?})", paint.brand, paint.name);
                    matched_paints.push(paint);
                }
                None => unmatched_names.push(name.as_str()),
            }
        }

        let total = set.paint_names.len();
        let match_rate = if total == 0 {
            0.0
        } else {
            matched_paints.len() as f64 / total as f64 * 100.0
        };

        tracing::debug!(
            "resolved set {:?}: {}/{total} matched",
            set.name,
            matched_paints.len()
        );
        if !unmatched_names.is_empty() {
            tracing::debug!("unmatched in {:?}: {unmatched_names:?}", set.name);
        }

        ResolvedPaintSet {
            set,
            matched_paints,
            unmatched_names,
            match_rate,
        }
    }

    fn resolve_name(
        &self,
        brand: &str,
        brand_key: &str,
        name: &str,
        same_brand: &mut Option<Vec<(String, &'a Paint)>>,
    ) -> Option<(&'a Paint, MatchTier)> {
        let name_key = normalize_key(name);

        let composite = normalize_key(&format!("{brand} {name}"));
        if let Some(paint) = self.by_brand_and_name.get(&composite) {
            return Some((*paint, MatchTier::Exact));
        }

        if let Some(paint) = self.by_name.get(&name_key) {
            if normalized_brands_match(brand_key, &normalize_key(&paint.brand)) {
                return Some((*paint, MatchTier::NameOnly));
            }
        }

        // Built lazily: most sets resolve every name in the first two tiers.
        let candidates = same_brand.get_or_insert_with(|| self.paints_of_brand(brand_key));
        candidates
            .iter()
            .find(|(key, _)| key.contains(&name_key) || name_key.contains(key.as_str()))
            .map(|(_, paint)| (*paint, MatchTier::Fuzzy))
    }

    /// Normalized names of catalog paints whose brand matches `brand_key`,
    /// in catalog order.
    fn paints_of_brand(&self, brand_key: &str) -> Vec<(String, &'a Paint)> {
        let candidates: Vec<_> = self
            .catalog
            .iter()
            .filter(|paint| normalized_brands_match(brand_key, &normalize_key(&paint.brand)))
            .map(|paint| (normalize_key(&paint.name), paint))
            .collect();
        if candidates.is_empty() && !self.catalog.is_empty() {
            tracing::warn!("no catalog paints for brand {brand_key:?}; alias table may be stale");
        }
        candidates
    }
}

/// Resolve a paint set's names to catalog paints.
///
/// Never fails on unmatched names; they are collected in
/// [`ResolvedPaintSet::unmatched_names`]. An empty catalog leaves every name
/// unmatched with a match rate of 0.
pub fn resolve_paint_set<'a>(set: &'a PaintSet, catalog: &'a [Paint]) -> ResolvedPaintSet<'a> {
    PaintIndex::new(catalog).resolve(set)
}

/// Resolve several sets against one catalog, building the indexes once.
pub fn resolve_paint_sets<'a>(sets: &'a [PaintSet], catalog: &'a [Paint]) -> Vec<ResolvedPaintSet<'a>> {
    let index = PaintIndex::new(catalog);
    sets.iter().map(|set| index.resolve(set)).collect()
}
