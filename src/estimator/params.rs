//! Parameter types configuring the estimation pipeline.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration: HSV green band, calibrated density tiers and
//! percentage-keyed advisories.

use crate::classify::ClassifierParams;
use crate::density::{AdvisoryParams, DensityModel};
use crate::error::Result;
use serde::Deserialize;

/// Largest raster accepted at the boundary (64 megapixels).
pub const DEFAULT_MAX_PIXELS: usize = 64 * 1024 * 1024;

/// Pipeline-wide parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Color space and band used to classify vegetation.
    pub classifier: ClassifierParams,
    /// Coverage -> tree count model.
    pub density_model: DensityModel,
    pub advisory: AdvisoryParams,
    /// Images with more pixels are rejected before decoding.
    pub max_pixels: usize,
    /// Return the vegetation mask with the report.
    pub keep_mask: bool,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            classifier: ClassifierParams::default(),
            density_model: DensityModel::default(),
            advisory: AdvisoryParams::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
            keep_mask: false,
        }
    }
}

impl EstimatorParams {
    /// Configuration faults are fatal, so check them before any request.
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;
        self.density_model.validate()
    }
}
