//! Subcommand implementations. Each returns the JSON value to print.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pigment_core::catalog::LabCatalog;
use pigment_core::matching::{MatchOptions, find_matches_by_role_with, resolve_paint_sets};
use pigment_core::{ColorSample, MatchConfig, Paint, PaintSet, delta_e76, hex_to_lab};
use serde::Deserialize;
use serde_json::{Value, json};

/// A set file holds either one paint set or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SetFile {
    One(PaintSet),
    Many(Vec<PaintSet>),
}

pub fn load_catalog(path: &Path) -> Result<Vec<Paint>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog: Vec<Paint> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::info!("loaded {} paints from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn load_sets(path: &Path) -> Result<Vec<PaintSet>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read paint sets {}", path.display()))?;
    let file: SetFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse paint sets {}", path.display()))?;
    Ok(match file {
        SetFile::One(set) => vec![set],
        SetFile::Many(sets) => sets,
    })
}

pub fn lab(hex: &str) -> Result<Value> {
    let lab = hex_to_lab(hex)?;
    Ok(serde_json::to_value(lab)?)
}

pub fn delta_e(first: &str, second: &str, config: &MatchConfig) -> Result<Value> {
    let de = delta_e76(&hex_to_lab(first)?, &hex_to_lab(second)?);
    Ok(json!({
        "deltaE": de,
        "similarity": config.similarity.similarity(de),
    }))
}

/// Ranked matches for each target, keyed by the target as given.
pub fn match_colors(
    catalog: &[Paint],
    targets: &[String],
    options: &MatchOptions,
    config: &MatchConfig,
) -> Result<Value> {
    let index = LabCatalog::new(catalog);
    let mut results = serde_json::Map::new();
    for hex in targets {
        let matches = index.rank_hex(hex, options, &config.similarity)?;
        results.insert(hex.clone(), serde_json::to_value(matches)?);
    }
    Ok(Value::Object(results))
}

pub fn match_roles(catalog: &[Paint], colors: &[String], config: &MatchConfig) -> Result<Value> {
    let samples: Vec<ColorSample> = colors.iter().map(|c| parse_sample(c)).collect();
    let by_role = find_matches_by_role_with(&samples, &LabCatalog::new(catalog), config)?;
    Ok(serde_json::to_value(by_role)?)
}

pub fn resolve(catalog: &[Paint], sets: &[PaintSet]) -> Result<Value> {
    let resolved = resolve_paint_sets(sets, catalog);
    for r in &resolved {
        if r.match_rate < 100.0 {
            tracing::info!(
                "{}: {:.0}% matched, missing {:?}",
                r.set.name,
                r.match_rate,
                r.unmatched_names
            );
        }
    }
    Ok(match resolved.as_slice() {
        [single] => serde_json::to_value(single)?,
        _ => serde_json::to_value(&resolved)?,
    })
}

/// `HEX` or `HEX:ROLE`.
fn parse_sample(arg: &str) -> ColorSample {
    match arg.split_once(':') {
        Some((hex, role)) if !role.trim().is_empty() => ColorSample::with_role(hex, role.trim()),
        Some((hex, _)) => ColorSample::new(hex),
        None => ColorSample::new(arg),
    }
}
