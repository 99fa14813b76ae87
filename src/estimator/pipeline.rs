//! Estimation pipeline driving classification and tree counting end-to-end.
//!
//! The [`VegetationEstimator`] takes either a decoded RGB view or encoded
//! image bytes plus an area in km², and returns the estimation result with
//! timing diagnostics and, when configured, the vegetation mask.
//!
//! Typical usage:
//! ```no_run
//! use green_cover::{EstimatorParams, VegetationEstimator};
//!
//! # fn example(bytes: &[u8]) -> green_cover::Result<()> {
//! let estimator = VegetationEstimator::new(EstimatorParams::default())?;
//! let report = estimator.process_encoded(bytes, Some(2.0))?;
//! let response = report.result.to_response();
//! println!("{} trees, {:.2}% green", response.tree_count, response.green_percentage);
//! # Ok(())
//! # }
//! ```
use super::params::EstimatorParams;
use crate::classify::{CoverageClassifier, VegetationMask};
use crate::density::TreeEstimator;
use crate::diagnostics::{DetailedResult, InputDescriptor, StageTiming, TimingBreakdown};
use crate::error::{EstimateError, Result};
use crate::image::io::decode_rgb;
use crate::image::{ImageView, RgbView};
use crate::types::EstimationResult;
use image::ImageFormat;
use log::{debug, info};
use std::time::Instant;

/// Output of one pipeline run.
#[derive(Clone, Debug)]
pub struct EstimationReport {
    pub result: EstimationResult,
    pub input: InputDescriptor,
    pub timing: TimingBreakdown,
    /// Present when `keep_mask` is set.
    pub mask: Option<VegetationMask>,
    /// Container format of the input, when it arrived encoded.
    pub source_format: Option<ImageFormat>,
}

impl EstimationReport {
    pub fn detailed(&self) -> DetailedResult {
        DetailedResult {
            result: self.result.clone(),
            input: self.input.clone(),
            timing: self.timing.clone(),
        }
    }
}

/// Classifier plus tree estimator, configured once and reused across requests.
#[derive(Clone, Debug)]
pub struct VegetationEstimator {
    classifier: CoverageClassifier,
    trees: TreeEstimator,
    max_pixels: usize,
    keep_mask: bool,
}

impl VegetationEstimator {
    /// Fails with `InvalidRange` (or `Config`) on a malformed configuration.
    pub fn new(params: EstimatorParams) -> Result<Self> {
        params.validate()?;
        let classifier = CoverageClassifier::new(params.classifier)?;
        let trees = TreeEstimator::new(params.density_model, &params.advisory)?;
        debug!(
            "VegetationEstimator: space={:?} range={:?} model={:?}",
            classifier.color_space(),
            classifier.range(),
            trees.model()
        );
        Ok(Self {
            classifier,
            trees,
            max_pixels: params.max_pixels,
            keep_mask: params.keep_mask,
        })
    }

    pub fn classifier(&self) -> &CoverageClassifier {
        &self.classifier
    }

    pub fn tree_estimator(&self) -> &TreeEstimator {
        &self.trees
    }

    /// Classify a decoded image and estimate trees for `area_km2`.
    pub fn process(&self, image: RgbView<'_>, area_km2: f64) -> Result<EstimationReport> {
        let t0 = Instant::now();
        let mut timing = TimingBreakdown::default();
        if image.pixel_count() > self.max_pixels {
            return Err(EstimateError::invalid_image(format!(
                "image of {}x{} exceeds the {} pixel limit",
                image.width(),
                image.height(),
                self.max_pixels
            )));
        }

        let t_classify = Instant::now();
        let (coverage, mask) = self.classifier.classify(image.clone())?;
        timing.push("classify", elapsed_ms(t_classify));

        let t_estimate = Instant::now();
        let result = self.trees.estimate(area_km2, &coverage);
        timing.push("estimate", elapsed_ms(t_estimate));
        timing.total_ms = elapsed_ms(t0);

        info!(
            "estimate: {}x{} green={:.2}% area={}km2 trees={} in {:.3}ms",
            image.width(),
            image.height(),
            result.vegetation_percentage,
            area_km2,
            result.tree_count,
            timing.total_ms
        );

        Ok(EstimationReport {
            result,
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
                matched_pixels: coverage.matched_pixels,
                total_pixels: coverage.total_pixels,
            },
            timing,
            mask: self.keep_mask.then_some(mask),
            source_format: None,
        })
    }

    /// Boundary entry point: encoded bytes and an optional area.
    ///
    /// The area is checked before the image is decoded so a bad request
    /// never pays for decoding.
    pub fn process_encoded(&self, bytes: &[u8], area_km2: Option<f64>) -> Result<EstimationReport> {
        let area_km2 = require_area(area_km2)?;

        let t_decode = Instant::now();
        let decoded = decode_rgb(bytes, self.max_pixels)?;
        let decode_ms = elapsed_ms(t_decode);

        let mut report = self.process(decoded.image.as_view(), area_km2)?;
        report
            .timing
            .stages
            .insert(0, StageTiming::new("decode", decode_ms));
        report.timing.total_ms += decode_ms;
        report.source_format = Some(decoded.format);
        Ok(report)
    }
}

fn require_area(area_km2: Option<f64>) -> Result<f64> {
    match area_km2 {
        Some(a) if a.is_finite() => Ok(a),
        Some(a) => Err(EstimateError::missing_input(format!(
            "area must be a finite number, got {a}"
        ))),
        None => Err(EstimateError::missing_input("area is required")),
    }
}

/// Parse the textual area field supplied at the boundary.
pub fn parse_area(text: Option<&str>) -> Result<f64> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| EstimateError::missing_input("area is required"))?;
    let area: f64 = text
        .parse()
        .map_err(|_| EstimateError::missing_input(format!("area '{text}' is not a number")))?;
    require_area(Some(area))
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}
