//! ImageData regression test
//!
//! Tests buffer validation, color depth detection and pixel access.

use heatmap_core::{ColorDepth, Error, ImageData, check_color_depth, pixel_count};
use heatmap_test::{RegParams, images};

#[test]
fn image_data_reg() {
    let mut rp = RegParams::new("image_data");

    // Depth follows the buffer length
    for channels in 1..=4u32 {
        let img = ImageData::new(vec![0; 6 * channels as usize], 3, 2).expect("image");
        rp.compare_values(channels as f64, img.depth().channels() as f64, 0.0);
        rp.compare_values(6.0, img.pixel_count() as f64, 0.0);
    }

    // RGBA length is enforced exactly
    for len in [0usize, 3, 5, 8, 12, 17] {
        let res = ImageData::from_rgba(vec![0; len], 2, 2);
        rp.compare_values(1.0, if res.is_err() { 1.0 } else { 0.0 }, 0.0);
    }
    let ok = check_color_depth(16, 2, 2, ColorDepth::Rgba);
    rp.compare_values(1.0, if ok.is_ok() { 1.0 } else { 0.0 }, 0.0);

    // The error names the mismatch
    let err = ImageData::from_rgba(vec![0; 10], 2, 2).unwrap_err();
    let text = err.to_string();
    rp.compare_values(1.0, if text.contains("10 bytes for 2x2") { 1.0 } else { 0.0 }, 0.0);

    // Any buffer that doesn't fit the size is a color depth mismatch
    for (len, w, h) in [(20usize, 2, 2), (0, 0, 0), (0, 2, 2), (6, 2, 2)] {
        let res = ImageData::new(vec![0; len], w, h);
        let mismatch = matches!(res, Err(Error::InvalidColorDepth { .. }));
        rp.compare_values(1.0, if mismatch { 1.0 } else { 0.0 }, 0.0);
    }

    // Zero-sized images have no pixel count
    rp.compare_values(6.0, pixel_count(3, 2).expect("pixel count") as f64, 0.0);
    let err = pixel_count(0, 5).unwrap_err();
    rp.compare_values(
        1.0,
        if err == (Error::InvalidDimension { width: 0, height: 5 }) { 1.0 } else { 0.0 },
        0.0,
    );

    // Pixel access on a synthetic ramp
    let ramp = images::gradient_rgba(256, 2).expect("gradient");
    rp.compare_bytes(&[128, 128, 128, 255], ramp.pixel(128, 1).expect("pixel"));
    rp.compare_values(512.0, ramp.pixels().count() as f64, 0.0);

    let data = ramp.clone().into_data();
    rp.compare_bytes(ramp.data(), &data);

    assert!(rp.cleanup(), "image_data regression test failed");
}
