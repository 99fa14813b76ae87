use super::*;
use crate::error::EstimateError;

const GREEN: [u8; 3] = [60, 150, 60];
const BROWN: [u8; 3] = [140, 100, 60];

fn solid(w: usize, h: usize, px: [u8; 3]) -> Vec<u8> {
    px.iter().copied().cycle().take(w * h * 3).collect()
}

#[test]
fn single_green_pixel_is_full_coverage() {
    let data = GREEN.to_vec();
    let (coverage, mask) = classify(RgbView::packed(1, 1, &data), &ClassifierParams::default())
        .expect("valid input");
    assert_eq!(coverage.vegetation_percentage, 100.0);
    assert_eq!(coverage.matched_pixels, 1);
    assert!(mask.get(0, 0));
}

#[test]
fn brown_soil_is_not_vegetation() {
    let data = solid(4, 4, BROWN);
    let (coverage, mask) =
        classify(RgbView::packed(4, 4, &data), &ClassifierParams::default()).unwrap();
    assert_eq!(coverage.vegetation_percentage, 0.0);
    assert_eq!(mask.matched(), 0);
}

#[test]
fn mask_marks_exactly_the_matching_pixels() {
    let (w, h) = (3usize, 2usize);
    let mut data = solid(w, h, BROWN);
    // (1,0) and (2,1) are green
    for (x, y) in [(1usize, 0usize), (2, 1)] {
        let i = (y * w + x) * 3;
        data[i..i + 3].copy_from_slice(&GREEN);
    }
    let (coverage, mask) =
        classify(RgbView::packed(w, h, &data), &ClassifierParams::default()).unwrap();
    assert_eq!(coverage.matched_pixels, 2);
    assert_eq!(coverage.vegetation_percentage, 33.33);
    for y in 0..h {
        for x in 0..w {
            assert_eq!(mask.get(x, y), (x, y) == (1, 0) || (x, y) == (2, 1));
        }
    }
    assert_eq!((mask.width(), mask.height()), (w, h));
}

#[test]
fn rgb_mode_thresholds_raw_channels() {
    let params = ClassifierParams::for_space(ColorSpace::Rgb);
    // inside [30,80,30]..[120,255,120]
    let data = [[50u8, 200, 50], [130, 200, 50], [50, 70, 50], [30, 80, 30]].concat();
    let (coverage, mask) = classify(RgbView::packed(4, 1, &data), &params).unwrap();
    assert_eq!(coverage.matched_pixels, 2);
    assert!(mask.get(0, 0) && !mask.get(1, 0) && !mask.get(2, 0) && mask.get(3, 0));
}

#[test]
fn hsv_and_rgb_disagree_on_shadowed_green() {
    // Dark green: hue stays green, but G falls below the RGB band's floor.
    let data = [20u8, 60, 20];
    let view = RgbView::packed(1, 1, &data);
    let (hsv, _) = classify(view.clone(), &ClassifierParams::default()).unwrap();
    let (rgb, _) = classify(view, &ClassifierParams::for_space(ColorSpace::Rgb)).unwrap();
    assert_eq!(hsv.vegetation_percentage, 100.0);
    assert_eq!(rgb.vegetation_percentage, 0.0);
}

#[test]
fn padded_rows_are_respected() {
    // 2x2 image with 2 bytes of padding per row
    let stride = 2 * 3 + 2;
    let mut data = vec![0u8; stride * 2];
    data[..3].copy_from_slice(&GREEN);
    data[stride + 3..stride + 6].copy_from_slice(&GREEN);
    // padding bytes set to green-ish values must be ignored
    data[6..8].copy_from_slice(&[150, 60]);
    let view = RgbView {
        w: 2,
        h: 2,
        stride,
        data: &data,
    };
    let (coverage, mask) = classify(view, &ClassifierParams::default()).unwrap();
    assert_eq!(coverage.vegetation_percentage, 50.0);
    assert!(mask.get(0, 0) && mask.get(1, 1));
}

#[test]
fn empty_image_is_invalid() {
    let data: Vec<u8> = Vec::new();
    for (w, h) in [(0usize, 5usize), (5, 0), (0, 0)] {
        let err = classify(RgbView::packed(w, h, &data), &ClassifierParams::default())
            .unwrap_err();
        assert!(matches!(err, EstimateError::InvalidImage(_)), "{w}x{h}: {err}");
    }
}

#[test]
fn short_buffer_is_invalid() {
    let data = vec![0u8; 5];
    let err = classify(RgbView::packed(2, 1, &data), &ClassifierParams::default()).unwrap_err();
    assert!(matches!(err, EstimateError::InvalidImage(_)));
}

#[test]
fn inverted_range_is_rejected_up_front() {
    let params = ClassifierParams {
        color_space: ColorSpace::Hsv,
        lower: [35, 40, 200],
        upper: [85, 255, 100],
    };
    let err = CoverageClassifier::new(params).unwrap_err();
    assert!(matches!(err, EstimateError::InvalidRange { channel: 2, .. }));
}

#[test]
fn large_image_counts_match_serial_sum() {
    let (w, h) = (257usize, 131usize);
    let mut data = solid(w, h, BROWN);
    let mut expected = 0usize;
    for y in 0..h {
        for x in 0..w {
            if (x * 7 + y * 13) % 5 == 0 {
                let i = (y * w + x) * 3;
                data[i..i + 3].copy_from_slice(&GREEN);
                expected += 1;
            }
        }
    }
    let (coverage, mask) =
        classify(RgbView::packed(w, h, &data), &ClassifierParams::default()).unwrap();
    assert_eq!(coverage.matched_pixels, expected);
    assert_eq!(mask.cells().iter().filter(|&&c| c).count(), expected);
    assert_eq!(mask.rows().count(), h);
}
