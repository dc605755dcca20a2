//! Paint catalog records and the precomputed L*a*b* catalog index.
//!
//! The catalog itself is owned by whoever loads it. The engine only ever
//! borrows it for the duration of one call.

use serde::{Deserialize, Serialize};

use crate::color::{Lab, hex_to_lab};

/// Category tag carried by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintType {
    Base,
    Layer,
    Shade,
    Wash,
    Contrast,
    Dry,
    Technical,
    Metallic,
    Air,
    Primer,
    Ink,
    #[serde(other)]
    Other,
}

/// A commercial paint as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub id: String,
    pub brand: String,
    pub name: String,
    /// `#RRGGBB`. Not validated on load; malformed values are skipped when
    /// the catalog is indexed.
    pub hex_color: String,
    #[serde(
        default,
        rename = "type",
        alias = "paintType",
        skip_serializing_if = "Option::is_none"
    )]
    pub paint_type: Option<PaintType>,
}

impl Paint {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
        hex_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            name: name.into(),
            hex_color: hex_color.into(),
            paint_type: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, paint_type: PaintType) -> Self {
        self.paint_type = Some(paint_type);
        self
    }
}

/// A named list of paint names under one nominal brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintSet {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Declared size of the set. Informational only; match rate is computed
    /// from `paint_names`.
    #[serde(default)]
    pub paint_count: usize,
    pub paint_names: Vec<String>,
}

impl PaintSet {
    pub fn new(name: impl Into<String>, brand: impl Into<String>, paint_names: Vec<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            brand: brand.into(),
            paint_count: paint_names.len(),
            paint_names,
        }
    }
}

/// A catalog with every entry converted to L*a*b* once.
///
/// Entries whose hex color does not parse are dropped with a warning, so one
/// bad record never aborts a ranking.
#[derive(Debug, Clone)]
pub struct LabCatalog<'a> {
    pub(crate) entries: Vec<(&'a Paint, Lab)>,
    skipped: usize,
}

impl<'a> LabCatalog<'a> {
    pub fn new(catalog: &'a [Paint]) -> Self {
        let mut entries = Vec::with_capacity(catalog.len());
        let mut skipped = 0;

        for paint in catalog {
            match hex_to_lab(&paint.hex_color) {
                Ok(lab) => entries.push((paint, lab)),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(
                        paint_id = %paint.id,
                        brand = %paint.brand,
                        name = %paint.name,
                        "skipping catalog entry: {e}"
                    );
                }
            }
        }

        if skipped > 0 {
            tracing::debug!("indexed {} paints, skipped {skipped}", entries.len());
        }

        Self { entries, skipped }
    }

    /// Number of matchable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of catalog entries dropped because of a malformed hex color.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Iterate over the indexed paints with their L*a*b* values.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Paint, Lab)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_json_shape() {
        let paint = Paint::new("c-1", "Citadel", "Abaddon Black", "#231F20").with_type(PaintType::Base);
        let json = serde_json::to_value(&paint).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "c-1",
                "brand": "Citadel",
                "name": "Abaddon Black",
                "hexColor": "#231F20",
                "type": "base",
            })
        );
    }

    #[test]
    fn test_paint_type_is_optional_and_lenient() {
        let paint: Paint = serde_json::from_str(
            r##"{"id":"x","brand":"B","name":"N","hexColor":"#000000"}"##,
        )
        .unwrap();
        assert_eq!(paint.paint_type, None);

        let paint: Paint = serde_json::from_str(
            r##"{"id":"x","brand":"B","name":"N","hexColor":"#000000","paintType":"speedpaint"}"##,
        )
        .unwrap();
        assert_eq!(paint.paint_type, Some(PaintType::Other));
    }

    #[test]
    fn test_paint_set_deserializes_camel_case() {
        let set: PaintSet = serde_json::from_str(
            r#"{"name":"Starter","brand":"Citadel","paintCount":2,"paintNames":["A","B"]}"#,
        )
        .unwrap();
        assert_eq!(set.paint_count, 2);
        assert_eq!(set.paint_names, vec!["A", "B"]);
        assert!(set.id.is_empty());
    }

    #[test]
    fn test_lab_catalog_skips_malformed_entries() {
        let catalog = vec![
            Paint::new("1", "Citadel", "Good", "#FF0000"),
            Paint::new("2", "Citadel", "Bad", "#FF00"),
            Paint::new("3", "Citadel", "Worse", "not-a-color"),
        ];
        let index = LabCatalog::new(&catalog);
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 2);
        assert_eq!(index.iter().next().map(|(p, _)| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_lab_catalog_empty() {
        let index = LabCatalog::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.skipped(), 0);
    }
}
