use serde::Serialize;

/// Round to two decimals, ties away from zero.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Share of pixels classified as vegetation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CoverageResult {
    /// Percentage in `[0, 100]`, rounded to two decimals.
    pub vegetation_percentage: f64,
    pub matched_pixels: usize,
    pub total_pixels: usize,
}

impl CoverageResult {
    /// Rounded percentage of `matched_pixels` out of `total_pixels`.
    ///
    /// Rounding never hides a partial result: any match reports at least
    /// 0.01, and anything short of every pixel reports at most 99.99.
    pub fn from_counts(matched_pixels: usize, total_pixels: usize) -> Self {
        let vegetation_percentage = if total_pixels == 0 || matched_pixels == 0 {
            0.0
        } else if matched_pixels >= total_pixels {
            100.0
        } else {
            round2(100.0 * matched_pixels as f64 / total_pixels as f64).clamp(0.01, 99.99)
        };
        Self {
            vegetation_percentage,
            matched_pixels,
            total_pixels,
        }
    }

    /// Coverage known only as a percentage (no pixel counts).
    pub fn from_percentage(vegetation_percentage: f64) -> Self {
        Self {
            vegetation_percentage,
            matched_pixels: 0,
            total_pixels: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EstimationResult {
    pub tree_count: u64,
    pub advisory: String,
    pub area_km2: f64,
    pub vegetation_percentage: f64,
}

impl EstimationResult {
    pub fn to_response(&self) -> CalculationResponse {
        CalculationResponse {
            green_percentage: self.vegetation_percentage,
            tree_count: self.tree_count,
            suggestion: self.advisory.clone(),
            area_size: self.area_km2,
        }
    }
}

/// Record handed back across the service boundary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub green_percentage: f64,
    pub tree_count: u64,
    pub suggestion: String,
    #[serde(rename = "areaSize")]
    pub area_size: f64,
}
