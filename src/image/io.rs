//! I/O helpers for RGB rasters, mask images and JSON.
//!
//! - `decode_rgb`: decode PNG/JPEG/etc. bytes into an owned RGB buffer.
//! - `load_rgb_image`: same, reading from disk.
//! - `encode_mask`: render a [`VegetationMask`] as an 8-bit image in a given format.
//! - `save_mask`: write a mask image to disk, format chosen from the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageView, RgbView};
use crate::classify::VegetationMask;
use crate::error::{EstimateError, Result};
use image::{DynamicImage, GrayImage, ImageFormat, ImageReader};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Owned, tightly packed 8-bit RGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct from raw interleaved RGB bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * 3 {
            return Err(EstimateError::invalid_image(format!(
                "expected {} bytes for {}x{} RGB, got {}",
                width * height * 3,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `RgbView`
    pub fn as_view(&self) -> RgbView<'_> {
        RgbView::packed(self.width, self.height, &self.data)
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Decoded image together with the container format it was read from.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub image: RgbImageU8,
    pub format: ImageFormat,
}

/// Decode encoded bytes into RGB, rejecting empty images and images with more
/// than `max_pixels` pixels before the pixel data is decoded.
pub fn decode_rgb(bytes: &[u8], max_pixels: usize) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(EstimateError::missing_input("image payload is empty"));
    }
    let format = image::guess_format(bytes)
        .map_err(|e| EstimateError::invalid_image(format!("unrecognised format: {e}")))?;

    let (w, h) = reader(bytes, format)
        .into_dimensions()
        .map_err(|e| EstimateError::invalid_image(format!("failed to read header: {e}")))?;
    let pixels = w as usize * h as usize;
    if pixels == 0 {
        return Err(EstimateError::invalid_image(format!(
            "image has no pixels ({w}x{h})"
        )));
    }
    if pixels > max_pixels {
        return Err(EstimateError::invalid_image(format!(
            "image of {w}x{h} exceeds the {max_pixels} pixel limit"
        )));
    }

    let rgb = reader(bytes, format)
        .decode()
        .map_err(|e| EstimateError::invalid_image(format!("failed to decode: {e}")))?
        .into_rgb8();
    let image = RgbImageU8::new(rgb.width() as usize, rgb.height() as usize, rgb.into_raw())?;
    Ok(DecodedImage { image, format })
}

fn reader(bytes: &[u8], format: ImageFormat) -> ImageReader<Cursor<&[u8]>> {
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(format);
    reader
}

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path, max_pixels: usize) -> Result<DecodedImage> {
    let bytes = fs::read(path)?;
    decode_rgb(&bytes, max_pixels)
        .map_err(|e| match e {
            EstimateError::InvalidImage(msg) => {
                EstimateError::InvalidImage(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
}

fn mask_to_gray(mask: &VegetationMask) -> Result<GrayImage> {
    GrayImage::from_raw(
        mask.width() as u32,
        mask.height() as u32,
        mask.to_luma(),
    )
    .ok_or_else(|| EstimateError::invalid_image("failed to create mask buffer"))
}

/// Encode a mask (foreground 255, background 0) in `format`.
pub fn encode_mask(mask: &VegetationMask, format: ImageFormat) -> Result<Vec<u8>> {
    let gray = mask_to_gray(mask)?;
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut out, format)
        .map_err(|e| EstimateError::invalid_image(format!("failed to encode mask: {e}")))?;
    Ok(out.into_inner())
}

/// Save a mask image, picking the encoder from the file extension.
pub fn save_mask(mask: &VegetationMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let gray = mask_to_gray(mask)?;
    gray.save(path).map_err(|e| {
        EstimateError::invalid_image(format!("failed to save {}: {e}", path.display()))
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        EstimateError::config(format!("failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
