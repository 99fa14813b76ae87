#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod classify;
pub mod density;
pub mod diagnostics;
pub mod error;
pub mod estimator;
pub mod image;
pub mod types;

// Supporting modules.
pub mod color;
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: estimator + results.
pub use crate::estimator::{parse_area, EstimationReport, EstimatorParams, VegetationEstimator};
pub use crate::types::{CalculationResponse, CoverageResult, EstimationResult};

// Stage-level entry points.
pub use crate::classify::{classify, ClassifierParams, CoverageClassifier, VegetationMask};
pub use crate::density::{estimate_tree_count, DensityModel, TreeEstimator};

pub use crate::error::{EstimateError, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use green_cover::prelude::*;
///
/// # fn main() -> green_cover::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let rgb = vec![0u8; w * h * 3];
/// let img = RgbView::packed(w, h, &rgb);
///
/// let estimator = VegetationEstimator::new(EstimatorParams::default())?;
/// let report = estimator.process(img, 2.0)?;
/// println!("green={:.2}% trees={}", report.result.vegetation_percentage, report.result.tree_count);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::color::{ColorRange, ColorSpace};
    pub use crate::image::RgbView;
    pub use crate::{EstimationResult, EstimatorParams, VegetationEstimator};
}
