//! Matcher configuration.

use serde::{Deserialize, Serialize};

use crate::difference::SimilarityCurve;
use crate::error::{Error, Result};
use crate::matching::matcher::{DEFAULT_MATCHES_PER_COLOR, DEFAULT_MAX_RESULTS, DEFAULT_ROLE};

/// Tunables for matching calls. Every field has a default, so a partial
/// config file deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Results returned per target color.
    pub max_results: usize,
    /// Results returned per color when grouping by role.
    pub matches_per_color: usize,
    /// Role assigned to color samples that carry none.
    pub default_role: String,
    /// ΔE → similarity calibration.
    pub similarity: SimilarityCurve,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            matches_per_color: DEFAULT_MATCHES_PER_COLOR,
            default_role: DEFAULT_ROLE.to_string(),
            similarity: SimilarityCurve::default(),
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_role.trim().is_empty() {
            return Err(Error::InvalidConfig("default role must not be empty".into()));
        }
        self.similarity.validate()
    }
}
