//! Advisory messages picked by threshold lookup.

use crate::error::{EstimateError, Result};
use serde::Deserialize;

/// Which value keys the advisory lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryStrategy {
    #[default]
    ByPercentage,
    ByTreeCount,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdvisoryEntry {
    pub threshold: f64,
    pub message: String,
}

impl AdvisoryEntry {
    pub fn new(threshold: f64, message: impl Into<String>) -> Self {
        Self {
            threshold,
            message: message.into(),
        }
    }
}

const HEALTHY: &str = "Healthy canopy: protect existing trees and monitor for loss.";
const MODERATE: &str = "Moderate cover: infill planting along open patches would raise canopy density.";
const PLANT_MORE: &str = "Consider planting more trees along non-green areas.";

/// `(threshold, message)` pairs, highest threshold first; the first entry
/// whose threshold the value reaches wins.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Vec<AdvisoryEntry>")]
pub struct AdvisoryTable {
    entries: Vec<AdvisoryEntry>,
}

impl AdvisoryTable {
    pub fn new(mut entries: Vec<AdvisoryEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EstimateError::config("advisory table has no entries"));
        }
        if let Some(bad) = entries.iter().find(|e| !e.threshold.is_finite()) {
            return Err(EstimateError::config(format!(
                "advisory threshold for '{}' is not finite",
                bad.message
            )));
        }
        entries.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        Ok(Self { entries })
    }

    /// Keyed by vegetation percentage.
    pub fn by_percentage() -> Self {
        Self {
            entries: vec![
                AdvisoryEntry::new(35.0, HEALTHY),
                AdvisoryEntry::new(15.0, MODERATE),
                AdvisoryEntry::new(0.0, PLANT_MORE),
            ],
        }
    }

    /// Keyed by estimated tree count.
    pub fn by_tree_count() -> Self {
        Self {
            entries: vec![
                AdvisoryEntry::new(10_000.0, HEALTHY),
                AdvisoryEntry::new(1_000.0, MODERATE),
                AdvisoryEntry::new(0.0, PLANT_MORE),
            ],
        }
    }

    pub fn for_strategy(strategy: AdvisoryStrategy) -> Self {
        match strategy {
            AdvisoryStrategy::ByPercentage => Self::by_percentage(),
            AdvisoryStrategy::ByTreeCount => Self::by_tree_count(),
        }
    }

    /// Values below every threshold fall back to the lowest entry.
    pub fn lookup(&self, value: f64) -> &str {
        self.entries
            .iter()
            .find(|e| value >= e.threshold)
            .unwrap_or_else(|| &self.entries[self.entries.len() - 1])
            .message
            .as_str()
    }
}

impl TryFrom<Vec<AdvisoryEntry>> for AdvisoryTable {
    type Error = EstimateError;

    fn try_from(entries: Vec<AdvisoryEntry>) -> Result<Self> {
        AdvisoryTable::new(entries)
    }
}

/// Advisory configuration; `table` overrides the strategy's default messages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisoryParams {
    pub strategy: AdvisoryStrategy,
    pub table: Option<AdvisoryTable>,
}

impl AdvisoryParams {
    pub fn resolve(&self) -> AdvisoryTable {
        self.table
            .clone()
            .unwrap_or_else(|| AdvisoryTable::for_strategy(self.strategy))
    }
}
