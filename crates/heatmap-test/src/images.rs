//! Synthetic test images
//!
//! All images are RGBA. Pixel values are deterministic so tests can
//! assert exact outputs.

use crate::error::{TestError, TestResult};
use heatmap_core::ImageData;

fn build(name: &'static str, data: Vec<u8>, width: u32, height: u32) -> TestResult<ImageData> {
    ImageData::from_rgba(data, width, height).map_err(|source| TestError::ImageBuild { name, source })
}

/// A uniform image.
pub fn solid_rgba(width: u32, height: u32, pixel: [u8; 4]) -> TestResult<ImageData> {
    let count = width as usize * height as usize;
    build("solid", pixel.repeat(count), width, height)
}

/// A horizontal gray ramp, 0 at the left edge to 255 at the right, opaque.
///
/// With `width == 256` every column holds its own gray level.
pub fn gradient_rgba(width: u32, height: u32) -> TestResult<ImageData> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..height {
        for x in 0..width {
            let v = if width > 1 {
                (x as u64 * 255 / (width as u64 - 1)) as u8
            } else {
                0
            };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    build("gradient", data, width, height)
}

/// Colored pixels whose alpha runs 0, 1, 2, ... wrapping at 256.
///
/// Useful for checking that alpha passes through untouched.
pub fn alpha_ramp_rgba(width: u32, height: u32) -> TestResult<ImageData> {
    let count = width as usize * height as usize;
    let mut data = Vec::with_capacity(count * 4);
    for i in 0..count {
        let r = (i * 7 % 256) as u8;
        let g = (i * 13 % 256) as u8;
        let b = (i * 29 % 256) as u8;
        data.extend_from_slice(&[r, g, b, (i % 256) as u8]);
    }
    build("alpha_ramp", data, width, height)
}

/// Alternating `dark` and `light` cells of `cell` x `cell` pixels.
pub fn checker_rgba(
    width: u32,
    height: u32,
    cell: u32,
    dark: [u8; 4],
    light: [u8; 4],
) -> TestResult<ImageData> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let pixel = if ((x / cell) + (y / cell)) % 2 == 0 {
                dark
            } else {
                light
            };
            data.extend_from_slice(&pixel);
        }
    }
    build("checker", data, width, height)
}
