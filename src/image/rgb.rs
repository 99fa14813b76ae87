use super::ImageView;
use crate::error::{EstimateError, Result};

/// Borrowed 8-bit RGB view (interleaved `R,G,B`, row-major).
#[derive(Clone, Debug)]
pub struct RgbView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> RgbView<'a> {
    /// Tightly packed view over `w * h * 3` bytes.
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w * 3,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Checks that the view describes at least one pixel and that the buffer
    /// covers every row it claims.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(EstimateError::invalid_image(format!(
                "image has no pixels ({}x{})",
                self.w, self.h
            )));
        }
        let row_bytes = self.w * Self::CHANNELS;
        if self.stride < row_bytes {
            return Err(EstimateError::invalid_image(format!(
                "stride {} shorter than row of {} bytes",
                self.stride, row_bytes
            )));
        }
        let needed = self.stride * (self.h - 1) + row_bytes;
        if self.data.len() < needed {
            return Err(EstimateError::invalid_image(format!(
                "buffer holds {} bytes, {}x{} RGB needs {}",
                self.data.len(),
                self.w,
                self.h,
                needed
            )));
        }
        Ok(())
    }
}

impl<'a> ImageView for RgbView<'a> {
    type Pixel = u8;
    const CHANNELS: usize = 3;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * Self::CHANNELS]
    }
}
