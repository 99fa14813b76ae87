#![allow(dead_code)]

/// Inside the default HSV green band (hue 60, sat 153, val 150).
pub const GREEN: [u8; 3] = [60, 150, 60];
/// Bare soil, hue 15: outside the green band in both HSV and RGB.
pub const SOIL: [u8; 3] = [140, 100, 60];

/// Packed RGB buffer with the first `green_rows` rows green and the rest soil.
pub fn banded_rgb(width: usize, height: usize, green_rows: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(green_rows <= height, "band taller than image");

    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let px = if y < green_rows { GREEN } else { SOIL };
        for _ in 0..width {
            img.extend_from_slice(&px);
        }
    }
    img
}

/// Packed RGB buffer where exactly `green` of `width * height` pixels are green,
/// spread in row-major order from the top-left.
pub fn with_green_pixels(width: usize, height: usize, green: usize) -> Vec<u8> {
    assert!(green <= width * height, "more green pixels than the image holds");
    (0..width * height)
        .flat_map(|i| if i < green { GREEN } else { SOIL })
        .collect()
}

/// Encode a packed RGB buffer as PNG.
pub fn png_bytes(width: usize, height: usize, rgb: Vec<u8>) -> Vec<u8> {
    let img = image::RgbImage::from_raw(width as u32, height as u32, rgb)
        .expect("buffer matches dimensions");
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("png encode");
    out.into_inner()
}
