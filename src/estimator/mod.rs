//! Vegetation estimator orchestrating the two-stage pipeline.
//!
//! Overview
//! - Validates the configuration once: an inverted color band is a startup
//!   fault, not a per-request one.
//! - Decodes encoded input (PNG, JPEG and whatever else the `image` crate
//!   reads) into RGB, rejecting empty or oversized rasters.
//! - Classifies pixels into a vegetation mask and reduces it to a
//!   percentage.
//! - Maps area and percentage to a tree count through the configured density
//!   model and picks an advisory message.
//!
//! Modules
//! - [`params`] – configuration types used by the estimator and CLI.
//! - `pipeline` – the [`VegetationEstimator`] implementation.

pub mod params;
mod pipeline;

pub use params::{EstimatorParams, DEFAULT_MAX_PIXELS};
pub use pipeline::{parse_area, EstimationReport, VegetationEstimator};
