//! Density tables mapping coverage to trees per km².

use crate::error::{EstimateError, Result};
use serde::Deserialize;

/// One band of the piecewise density model.
///
/// A tier is selected when the coverage fraction is strictly greater than
/// `above_fraction`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DensityTier {
    pub name: String,
    pub above_fraction: f64,
    pub trees_per_km2: f64,
}

impl DensityTier {
    pub fn new(name: impl Into<String>, above_fraction: f64, trees_per_km2: f64) -> Self {
        Self {
            name: name.into(),
            above_fraction,
            trees_per_km2,
        }
    }
}

/// Tiers ordered from the highest breakpoint down. The last tier also catches
/// every fraction that clears no breakpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Vec<DensityTier>")]
pub struct TierTable {
    tiers: Vec<DensityTier>,
}

pub const SPARSE_BREAKPOINT: f64 = 0.0;
pub const MODERATE_BREAKPOINT: f64 = 0.15;
pub const DENSE_BREAKPOINT: f64 = 0.35;

impl TierTable {
    pub fn new(mut tiers: Vec<DensityTier>) -> Result<Self> {
        check_tiers(&tiers)?;
        tiers.sort_by(|a, b| b.above_fraction.total_cmp(&a.above_fraction));
        Ok(Self { tiers })
    }

    /// Three-band table with the shared 0.15 / 0.35 breakpoints.
    fn three_band(sparse: f64, moderate: f64, dense: f64) -> Self {
        Self {
            tiers: vec![
                DensityTier::new("dense", DENSE_BREAKPOINT, dense),
                DensityTier::new("moderate", MODERATE_BREAKPOINT, moderate),
                DensityTier::new("sparse", SPARSE_BREAKPOINT, sparse),
            ],
        }
    }

    /// Uncalibrated 500 / 2000 / 5000 trees per km².
    pub fn generic() -> Self {
        Self::three_band(500.0, 2000.0, 5000.0)
    }

    /// Field-calibrated 3000 / 7500 / 12000 trees per km².
    pub fn calibrated() -> Self {
        Self::three_band(3000.0, 7500.0, 12000.0)
    }

    pub fn tiers(&self) -> &[DensityTier] {
        &self.tiers
    }

    /// First tier (highest breakpoint first) the fraction strictly exceeds.
    pub fn select(&self, fraction: f64) -> &DensityTier {
        self.tiers
            .iter()
            .find(|t| fraction > t.above_fraction)
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }
}

/// Non-empty, finite, non-negative densities.
fn check_tiers(tiers: &[DensityTier]) -> Result<()> {
    if tiers.is_empty() {
        return Err(EstimateError::config("density table has no tiers"));
    }
    for tier in tiers {
        if !tier.above_fraction.is_finite() || !tier.trees_per_km2.is_finite() {
            return Err(EstimateError::config(format!(
                "tier '{}' has a non-finite value",
                tier.name
            )));
        }
        if tier.trees_per_km2 < 0.0 {
            return Err(EstimateError::config(format!(
                "tier '{}' has negative density {}",
                tier.name, tier.trees_per_km2
            )));
        }
    }
    Ok(())
}

impl TryFrom<Vec<DensityTier>> for TierTable {
    type Error = EstimateError;

    fn try_from(tiers: Vec<DensityTier>) -> Result<Self> {
        TierTable::new(tiers)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::calibrated()
    }
}

pub const RATIO_TREES_PER_KM2: f64 = 288_673.0;
pub const RATIO_CANOPY_SHARE: f64 = 0.217;

/// How coverage is turned into a tree count.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DensityModel {
    /// `round(area * fraction * tier_density)`.
    Tiered { tiers: TierTable },
    /// `round(percentage * ratio * trees_per_km2 * area)`; uses the raw
    /// percentage, not the fraction.
    Ratio { ratio: f64, trees_per_km2: f64 },
}

impl Default for DensityModel {
    fn default() -> Self {
        DensityModel::Tiered {
            tiers: TierTable::calibrated(),
        }
    }
}

impl DensityModel {
    pub fn generic() -> Self {
        DensityModel::Tiered {
            tiers: TierTable::generic(),
        }
    }

    pub fn calibrated() -> Self {
        DensityModel::Tiered {
            tiers: TierTable::calibrated(),
        }
    }

    pub fn ratio_model() -> Self {
        DensityModel::Ratio {
            ratio: RATIO_CANOPY_SHARE,
            trees_per_km2: RATIO_TREES_PER_KM2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            DensityModel::Tiered { tiers } => check_tiers(tiers.tiers()),
            DensityModel::Ratio {
                ratio,
                trees_per_km2,
            } => {
                if !ratio.is_finite() || !trees_per_km2.is_finite() {
                    return Err(EstimateError::config("ratio model constants must be finite"));
                }
                if *ratio < 0.0 || *trees_per_km2 < 0.0 {
                    return Err(EstimateError::config(
                        "ratio model constants must be non-negative",
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_strict() {
        let table = TierTable::calibrated();
        assert_eq!(table.select(0.36).name, "dense");
        assert_eq!(table.select(0.35).name, "moderate");
        assert_eq!(table.select(0.16).name, "moderate");
        assert_eq!(table.select(0.15).name, "sparse");
        assert_eq!(table.select(0.01).name, "sparse");
    }

    #[test]
    fn unordered_tiers_are_sorted_highest_first() {
        let table = TierTable::new(vec![
            DensityTier::new("low", 0.0, 1.0),
            DensityTier::new("high", 0.5, 3.0),
            DensityTier::new("mid", 0.2, 2.0),
        ])
        .unwrap();
        let names: Vec<_> = table.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            TierTable::new(Vec::new()),
            Err(EstimateError::Config(_))
        ));
    }

    #[test]
    fn non_finite_or_negative_densities_are_rejected() {
        for density in [f64::NAN, f64::INFINITY, -1.0] {
            let err = TierTable::new(vec![DensityTier::new("bad", 0.0, density)]).unwrap_err();
            assert!(matches!(err, EstimateError::Config(_)), "{density}: {err}");
        }
        let json = r#"{ "kind": "tiered", "tiers": [
            { "name": "bad", "above_fraction": 0.0, "trees_per_km2": -5 }
        ] }"#;
        assert!(serde_json::from_str::<DensityModel>(json).is_err());
        assert!(DensityModel::calibrated().validate().is_ok());
    }

    #[test]
    fn model_deserializes_from_tagged_json() {
        let json = r#"{
            "kind": "tiered",
            "tiers": [
                { "name": "sparse", "above_fraction": 0.0, "trees_per_km2": 500 },
                { "name": "dense", "above_fraction": 0.35, "trees_per_km2": 5000 },
                { "name": "moderate", "above_fraction": 0.15, "trees_per_km2": 2000 }
            ]
        }"#;
        let model: DensityModel = serde_json::from_str(json).unwrap();
        assert_eq!(model, DensityModel::generic());

        let ratio: DensityModel =
            serde_json::from_str(r#"{ "kind": "ratio", "ratio": 0.217, "trees_per_km2": 288673 }"#)
                .unwrap();
        assert_eq!(ratio, DensityModel::ratio_model());
    }
}
