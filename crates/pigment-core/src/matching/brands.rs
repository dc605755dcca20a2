//! Brand-name normalization and the static brand equivalence table.
//!
//! Real catalogs spell the same brand several ways ("Army Painter",
//! "The Army Painter", "Games Workshop", "Citadel"). Matching compares
//! normalized keys and consults [`BRAND_EQUIVALENTS`] for aliases that share no
//! substring.
//!
//! The table has to track the brand strings the catalog actually uses. A stale
//! entry does not raise an error, it only lowers the match rate.

/// Equivalence groups keyed by canonical brand. All values are normalized
/// (see [`normalize_key`]).
pub const BRAND_EQUIVALENTS: &[(&str, &[&str])] = &[
    ("armypainter", &["armypainter", "thearmypainter", "warpaints"]),
    (
        "citadel",
        &["citadel", "citadelcolour", "citadelcolor", "gamesworkshop", "gw"],
    ),
    (
        "vallejo",
        &[
            "vallejo",
            "vallejomodelcolor",
            "vallejogamecolor",
            "vallejomodelair",
            "vallejogameair",
            "acrylicosvallejo",
        ],
    ),
    ("reaper", &["reaper", "reapermsp", "reaperminiatures", "reapermasterseries"]),
    ("scale75", &["scale75", "scalecolor", "scale75scalecolor"]),
];

/// Lowercase and drop every character outside `[a-z0-9]`.
///
/// ```
/// use pigment_core::matching::normalize_key;
///
/// assert_eq!(normalize_key("The Army-Painter!"), "thearmypainter");
/// assert_eq!(normalize_key("Scale 75"), "scale75");
/// ```
pub fn normalize_key(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Whether two brand strings refer to the same brand.
///
/// True when the normalized forms are equal, when one contains the other, or
/// when both belong to the same group in [`BRAND_EQUIVALENTS`]. A brand that
/// normalizes to nothing is contained in, and so matches, every brand.
pub fn brands_match(b1: &str, b2: &str) -> bool {
    normalized_brands_match(&normalize_key(b1), &normalize_key(b2))
}

pub(crate) fn normalized_brands_match(n1: &str, n2: &str) -> bool {
    if n1 == n2 {
        return true;
    }
    if n1.contains(n2) || n2.contains(n1) {
        return true;
    }

    BRAND_EQUIVALENTS
        .iter()
        .any(|(_, variants)| variants.contains(&n1) && variants.contains(&n2))
}

/// Canonical key of the equivalence group a brand belongs to, if any.
///
/// ```
/// use pigment_core::matching::canonical_brand;
///
/// assert_eq!(canonical_brand("Games Workshop"), Some("citadel"));
/// assert_eq!(canonical_brand("Unknown Paints Co"), None);
/// ```
pub fn canonical_brand(brand: &str) -> Option<&'static str> {
    let key = normalize_key(brand);
    BRAND_EQUIVALENTS
        .iter()
        .find(|(_, variants)| variants.contains(&key.as_str()))
        .map(|(canonical, _)| *canonical)
}
