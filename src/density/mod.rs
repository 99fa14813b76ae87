//! Tree density estimator: (area, coverage) -> tree count and advisory.
//!
//! A non-positive (or non-finite) area or coverage yields zero trees without
//! consulting the density model. The advisory lookup runs regardless, so a
//! zero-area request still reports a message for its coverage.

pub mod advisory;
pub mod tiers;

pub use advisory::{AdvisoryEntry, AdvisoryParams, AdvisoryStrategy, AdvisoryTable};
pub use tiers::{DensityModel, DensityTier, TierTable};

use crate::error::Result;
use crate::types::{CoverageResult, EstimationResult};
use log::debug;

/// Estimated tree count for `area_km2` at `vegetation_percentage` coverage.
pub fn estimate_tree_count(area_km2: f64, vegetation_percentage: f64, model: &DensityModel) -> u64 {
    if is_degenerate(area_km2) || is_degenerate(vegetation_percentage) {
        debug!(
            "zero estimate: area_km2={} vegetation_percentage={}",
            area_km2, vegetation_percentage
        );
        return 0;
    }

    let trees = match model {
        DensityModel::Tiered { tiers } => {
            let fraction = vegetation_percentage / 100.0;
            let tier = tiers.select(fraction);
            debug!(
                "density tier '{}' ({} trees/km2) for fraction {:.4}",
                tier.name, tier.trees_per_km2, fraction
            );
            area_km2 * fraction * tier.trees_per_km2
        }
        DensityModel::Ratio {
            ratio,
            trees_per_km2,
        } => vegetation_percentage * ratio * trees_per_km2 * area_km2,
    };
    // `as` saturates, so absurd areas clamp to u64::MAX instead of wrapping.
    trees.round().max(0.0) as u64
}

fn is_degenerate(v: f64) -> bool {
    !v.is_finite() || v <= 0.0
}

/// Density model plus advisory lookup, built once from configuration.
#[derive(Clone, Debug)]
pub struct TreeEstimator {
    model: DensityModel,
    strategy: AdvisoryStrategy,
    advisory: AdvisoryTable,
}

impl Default for TreeEstimator {
    fn default() -> Self {
        Self {
            model: DensityModel::default(),
            strategy: AdvisoryStrategy::default(),
            advisory: AdvisoryTable::by_percentage(),
        }
    }
}

impl TreeEstimator {
    pub fn new(model: DensityModel, advisory: &AdvisoryParams) -> Result<Self> {
        model.validate()?;
        Ok(Self {
            model,
            strategy: advisory.strategy,
            advisory: advisory.resolve(),
        })
    }

    pub fn model(&self) -> &DensityModel {
        &self.model
    }

    pub fn estimate(&self, area_km2: f64, coverage: &CoverageResult) -> EstimationResult {
        let pct = coverage.vegetation_percentage;
        let tree_count = estimate_tree_count(area_km2, pct, &self.model);
        let key = match self.strategy {
            AdvisoryStrategy::ByPercentage => pct,
            AdvisoryStrategy::ByTreeCount => tree_count as f64,
        };
        EstimationResult {
            tree_count,
            advisory: self.advisory.lookup(key).to_string(),
            area_km2,
            vegetation_percentage: pct,
        }
    }
}

#[cfg(test)]
mod tests;
