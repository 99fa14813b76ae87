//! Color spaces and inclusive classification bands.
//!
//! HSV uses the 8-bit convention common to vision toolkits: hue is degrees
//! halved into `[0, 180)`, saturation and value span `[0, 255]`. Bands are
//! expressed on the same scale, so `[35, 40, 40]..=[85, 255, 255]` selects
//! hues between 70° and 170°.

use crate::error::{EstimateError, Result};
use serde::Deserialize;

/// Space in which a [`ColorRange`] is evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Rgb,
    #[default]
    Hsv,
}

/// Inclusive per-channel band `lower[c] <= px[c] <= upper[c]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// Green band in 8-bit HSV.
    pub const HSV_GREEN: ColorRange = ColorRange::new([35, 40, 40], [85, 255, 255]);

    /// Green band in raw RGB, for the RGB fallback mode.
    pub const RGB_GREEN: ColorRange = ColorRange::new([30, 80, 30], [120, 255, 120]);

    /// Default band for a color space.
    pub fn green(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Rgb => Self::RGB_GREEN,
            ColorSpace::Hsv => Self::HSV_GREEN,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for channel in 0..3 {
            let (lower, upper) = (self.lower[channel], self.upper[channel]);
            if lower > upper {
                return Err(EstimateError::InvalidRange {
                    channel,
                    lower,
                    upper,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, px: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= px[c] && px[c] <= self.upper[c])
    }
}

/// Convert one RGB pixel to 8-bit HSV (`h` in `[0, 180)`, `s`/`v` in `[0, 255]`).
#[inline]
pub fn rgb_to_hsv8(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let s = if max == 0 {
        0.0
    } else {
        (255.0 * delta / max as f32).round()
    };

    // Achromatic
    if max == min {
        return [0, s as u8, max];
    }

    let (r, g, b) = (r as f32, g as f32, b as f32);
    let mut h = if max as f32 == r {
        60.0 * (g - b) / delta
    } else if max as f32 == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }
    let mut h = (h / 2.0).round();
    if h >= 180.0 {
        h -= 180.0;
    }
    [h as u8, s as u8, max]
}

/// Map a pixel into `space`.
#[inline]
pub fn convert(rgb: [u8; 3], space: ColorSpace) -> [u8; 3] {
    match space {
        ColorSpace::Rgb => rgb,
        ColorSpace::Hsv => rgb_to_hsv8(rgb),
    }
}
