//! Coverage classifier: RGB raster -> vegetation mask -> coverage percentage.
//!
//! Each pixel is mapped into the configured [`ColorSpace`] and marked as
//! vegetation when all three channels fall inside the [`ColorRange`]. Rows are
//! independent, so with the `parallel` feature they are classified on the
//! rayon pool; the matched count is a plain sum and does not depend on the
//! order rows finish in.
//!
//! ```no_run
//! use green_cover::classify::{ClassifierParams, CoverageClassifier};
//! use green_cover::image::RgbView;
//!
//! # fn example(view: RgbView) -> green_cover::Result<()> {
//! let classifier = CoverageClassifier::new(ClassifierParams::default())?;
//! let (coverage, _mask) = classifier.classify(view)?;
//! println!("vegetation: {:.2}%", coverage.vegetation_percentage);
//! # Ok(())
//! # }
//! ```

mod mask;

pub use mask::VegetationMask;

use crate::color::{convert, ColorRange, ColorSpace};
use crate::error::Result;
use crate::image::{ImageView, RgbView};
use crate::types::CoverageResult;
use log::debug;
use serde::Deserialize;

/// Classifier configuration: color space plus the inclusive band in it.
///
/// Bounds omitted from a config file fall back to the green band of the
/// selected color space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClassifierParams")]
pub struct ClassifierParams {
    pub color_space: ColorSpace,
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self::for_space(ColorSpace::Hsv)
    }
}

impl ClassifierParams {
    /// Default green band for `space`.
    pub fn for_space(space: ColorSpace) -> Self {
        let range = ColorRange::green(space);
        Self {
            color_space: space,
            lower: range.lower,
            upper: range.upper,
        }
    }

    pub fn range(&self) -> ColorRange {
        ColorRange::new(self.lower, self.upper)
    }

    pub fn validate(&self) -> Result<()> {
        self.range().validate()
    }
}

#[derive(Deserialize)]
struct RawClassifierParams {
    #[serde(default)]
    color_space: ColorSpace,
    lower: Option<[u8; 3]>,
    upper: Option<[u8; 3]>,
}

impl From<RawClassifierParams> for ClassifierParams {
    fn from(raw: RawClassifierParams) -> Self {
        let green = ColorRange::green(raw.color_space);
        Self {
            color_space: raw.color_space,
            lower: raw.lower.unwrap_or(green.lower),
            upper: raw.upper.unwrap_or(green.upper),
        }
    }
}

/// Classifier with a validated band.
#[derive(Clone, Debug)]
pub struct CoverageClassifier {
    space: ColorSpace,
    range: ColorRange,
}

impl CoverageClassifier {
    /// Fails with `InvalidRange` when any lower bound exceeds its upper bound.
    pub fn new(params: ClassifierParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            space: params.color_space,
            range: params.range(),
        })
    }

    pub fn color_space(&self) -> ColorSpace {
        self.space
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    pub fn classify(&self, image: RgbView<'_>) -> Result<(CoverageResult, VegetationMask)> {
        image.validate()?;
        let (w, h) = (image.width(), image.height());
        let mut cells = vec![false; w * h];

        #[cfg(feature = "parallel")]
        let matched = classify_rows_parallel(&image, &mut cells, self.range, self.space);
        #[cfg(not(feature = "parallel"))]
        let matched = classify_rows_serial(&image, &mut cells, self.range, self.space);

        let coverage = CoverageResult::from_counts(matched, w * h);
        debug!(
            "classify: {}x{} space={:?} matched={} coverage={:.2}%",
            w, h, self.space, matched, coverage.vegetation_percentage
        );
        Ok((coverage, VegetationMask::from_cells(w, h, cells, matched)))
    }
}

/// One-shot classification with an unvalidated configuration.
pub fn classify(
    image: RgbView<'_>,
    params: &ClassifierParams,
) -> Result<(CoverageResult, VegetationMask)> {
    CoverageClassifier::new(*params)?.classify(image)
}

#[inline]
fn classify_row(row: &[u8], out: &mut [bool], range: ColorRange, space: ColorSpace) -> usize {
    let mut matched = 0usize;
    for (px, cell) in row.chunks_exact(3).zip(out.iter_mut()) {
        let hit = range.contains(convert([px[0], px[1], px[2]], space));
        *cell = hit;
        matched += hit as usize;
    }
    matched
}

#[cfg(not(feature = "parallel"))]
fn classify_rows_serial(
    image: &RgbView<'_>,
    cells: &mut [bool],
    range: ColorRange,
    space: ColorSpace,
) -> usize {
    cells
        .chunks_mut(image.w)
        .enumerate()
        .map(|(y, out)| classify_row(image.row(y), out, range, space))
        .sum()
}

#[cfg(feature = "parallel")]
fn classify_rows_parallel(
    image: &RgbView<'_>,
    cells: &mut [bool],
    range: ColorRange,
    space: ColorSpace,
) -> usize {
    use rayon::prelude::*;

    cells
        .par_chunks_mut(image.w)
        .enumerate()
        .map(|(y, out)| classify_row(image.row(y), out, range, space))
        .sum()
}

#[cfg(test)]
mod tests;
