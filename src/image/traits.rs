/// Read-only access to an interleaved raster, one row at a time.
///
/// `row(y)` returns `width() * CHANNELS` samples.
pub trait ImageView {
    type Pixel: Copy;

    /// Interleaved samples per pixel.
    const CHANNELS: usize;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Samples between the starts of consecutive rows.
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
