//! Rainbow pseudocolor mapping
//!
//! Maps the intensity of each pixel through the [`RainbowLut`] tables so
//! that dark areas become blue and bright areas red.
//!
//! # Examples
//!
//! ```
//! use heatmap_color::pseudocolor::{pseudocolor, PseudocolorOptions};
//! use heatmap_core::ImageData;
//!
//! // White with alpha 127 becomes red with alpha 127
//! let img = ImageData::from_rgba(vec![255, 255, 255, 127], 1, 1).unwrap();
//! let out = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
//! assert_eq!(out.data(), &[255, 0, 0, 127]);
//! ```

use heatmap_core::color::{ALPHA, BLUE, GREEN, RED};
use heatmap_core::{ColorDepth, ImageData};
use serde::{Deserialize, Serialize};

use crate::ColorResult;
use crate::grayscale::{GrayscaleOptions, grayscale};
use crate::lut::RainbowLut;

/// Options for [`pseudocolor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudocolorOptions {
    /// The input is already grayscale; skip the luma reduction step
    pub grayscaled: bool,
}

impl PseudocolorOptions {
    /// Mark the input as already grayscale.
    pub fn with_grayscaled(mut self, grayscaled: bool) -> Self {
        self.grayscaled = grayscaled;
        self
    }
}

/// Apply the rainbow pseudocolor ramp to an RGBA image.
///
/// Unless `options.grayscaled` is set, the image is first reduced with
/// luma grayscale. Each output channel is then looked up in its own table
/// using the matching channel of the gray image, and alpha is copied from
/// `image`. The tables are rebuilt on every call.
///
/// # Errors
///
/// Returns an invalid color depth error (see
/// [`ColorError::is_invalid_color_depth`](crate::ColorError::is_invalid_color_depth))
/// if `image` is not RGBA.
pub fn pseudocolor(image: &ImageData, options: &PseudocolorOptions) -> ColorResult<ImageData> {
    image.check_color_depth(ColorDepth::Rgba)?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        grayscaled = options.grayscaled,
        "pseudocolor"
    );

    let converted;
    let source = if options.grayscaled {
        image
    } else {
        converted = grayscale(image, &GrayscaleOptions::default())?;
        &converted
    };

    let lut = RainbowLut::new();
    let mut data = Vec::with_capacity(image.data().len());

    for (gray, original) in source.pixels().zip(image.pixels()) {
        let [r, g, b] = lut.map(gray[RED], gray[GREEN], gray[BLUE]);
        data.extend_from_slice(&[r, g, b, original[ALPHA]]);
    }

    Ok(ImageData::from_rgba(data, image.width(), image.height())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale::{Channel, GrayscaleMode};

    #[test]
    fn test_white_becomes_red() {
        let img = ImageData::from_rgba(vec![255, 255, 255, 127], 1, 1).unwrap();
        let out = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
        assert_eq!(out.data(), &[255, 0, 0, 127]);
    }

    #[test]
    fn test_black_becomes_blue() {
        let img = ImageData::from_rgba(vec![0, 0, 0, 255], 1, 1).unwrap();
        let out = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
        assert_eq!(out.data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_mid_gray_becomes_green() {
        let img = ImageData::from_rgba(vec![128, 128, 128, 0], 1, 1).unwrap();
        let out = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
        assert_eq!(out.data(), &[0, 255, 0, 0]);
    }

    #[test]
    fn test_grayscaled_input_indexes_each_channel() {
        // Not actually gray: each channel drives its own table
        let img = ImageData::from_rgba(vec![255, 0, 0, 9], 1, 1).unwrap();
        let opts = PseudocolorOptions::default().with_grayscaled(true);
        let out = pseudocolor(&img, &opts).unwrap();
        assert_eq!(out.data(), &[255, 0, 255, 9]);
    }

    #[test]
    fn test_grayscaled_flag_matches_internal_reduction() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 37 % 256) as u8).collect();
        let img = ImageData::from_rgba(data, 4, 4).unwrap();
        let direct = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
        let gray = grayscale(&img, &GrayscaleOptions::default()).unwrap();
        let staged = pseudocolor(&gray, &PseudocolorOptions::default().with_grayscaled(true)).unwrap();
        assert_eq!(direct, staged);
    }

    #[test]
    fn test_non_luma_gray_source() {
        let img = ImageData::from_rgba(vec![255, 0, 0, 1], 1, 1).unwrap();
        let gray = grayscale(
            &img,
            &GrayscaleOptions::default().with_mode(GrayscaleMode::Simple(Channel::Red)),
        )
        .unwrap();
        let out = pseudocolor(&gray, &PseudocolorOptions::default().with_grayscaled(true)).unwrap();
        assert_eq!(out.data(), &[255, 0, 0, 1]);
    }

    #[test]
    fn test_rejects_monochrome_input() {
        let img = ImageData::from_gray(vec![0; 4], 2, 2).unwrap();
        let err = pseudocolor(&img, &PseudocolorOptions::default()).unwrap_err();
        assert!(err.is_invalid_color_depth());

        let err = pseudocolor(&img, &PseudocolorOptions::default().with_grayscaled(true)).unwrap_err();
        assert!(err.is_invalid_color_depth());
    }
}
