//! Heatmap Core - Basic data structures for pseudocolor processing
//!
//! This crate provides the fundamental types shared by the heatmap crates:
//!
//! - [`ImageData`] - Interleaved 8-bit pixel buffer with width and height
//! - [`ColorDepth`] - Channels per pixel (1 to 4)
//! - [`Error`] / [`Result`] - Core error type
//! - [`color`] - Channel offsets and the 8-bit rounding rule

pub mod error;
pub mod image_data;

pub use error::{Error, Result};
pub use image_data::{ColorDepth, ImageData, check_color_depth, pixel_count};

/// Channel offsets and helpers for interleaved RGBA pixels.
///
/// # Pixel format
///
/// 4-channel pixels are stored as `[R, G, B, A]`.
pub mod color {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Bytes per RGBA pixel
    pub const RGBA_CHANNELS: usize = 4;

    /// Store a floating-point value into 8 bits.
    ///
    /// Rounds half away from zero, then clamps to `[0, 255]`. NaN becomes 0.
    /// Every grayscale value and lookup-table entry goes through this.
    #[inline]
    pub fn clamp_to_u8(value: f32) -> u8 {
        if value.is_nan() {
            return 0;
        }
        value.round().clamp(0.0, 255.0) as u8
    }

    /// Extract `(r, g, b, a)` from an RGBA pixel slice.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` has fewer than 4 bytes.
    #[inline]
    pub fn extract_rgba(pixel: &[u8]) -> (u8, u8, u8, u8) {
        (pixel[RED], pixel[GREEN], pixel[BLUE], pixel[ALPHA])
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_clamp_rounds_half_away_from_zero() {
            assert_eq!(clamp_to_u8(0.5), 1);
            assert_eq!(clamp_to_u8(1.49), 1);
            assert_eq!(clamp_to_u8(2.5), 3);
            assert_eq!(clamp_to_u8(254.5), 255);
        }

        #[test]
        fn test_clamp_saturates() {
            assert_eq!(clamp_to_u8(-1.0), 0);
            assert_eq!(clamp_to_u8(-0.4), 0);
            assert_eq!(clamp_to_u8(256.0), 255);
            assert_eq!(clamp_to_u8(1e9), 255);
            assert_eq!(clamp_to_u8(f32::NAN), 0);
            assert_eq!(clamp_to_u8(f32::INFINITY), 255);
        }

        #[test]
        fn test_extract_rgba() {
            assert_eq!(extract_rgba(&[1, 2, 3, 4]), (1, 2, 3, 4));
        }
    }
}
