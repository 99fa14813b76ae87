use crate::image::ImageView;

/// Binary vegetation grid with the source image's dimensions (row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VegetationMask {
    w: usize,
    h: usize,
    matched: usize,
    cells: Vec<bool>,
}

impl VegetationMask {
    pub(crate) fn from_cells(w: usize, h: usize, cells: Vec<bool>, matched: usize) -> Self {
        debug_assert_eq!(cells.len(), w * h);
        debug_assert_eq!(cells.iter().filter(|&&c| c).count(), matched);
        Self {
            w,
            h,
            matched,
            cells,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.w + x]
    }

    /// Number of `true` cells.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// 8-bit rendering: 255 for vegetation, 0 otherwise.
    pub fn to_luma(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| if c { 255 } else { 0 }).collect()
    }

    /// Paint the mask back into interleaved RGB using two fixed colors.
    pub fn to_rgb(&self, foreground: [u8; 3], background: [u8; 3]) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|&c| if c { foreground } else { background })
            .collect()
    }
}

impl ImageView for VegetationMask {
    type Pixel = bool;
    const CHANNELS: usize = 1;

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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.cells[start..start + self.w]
    }
}
