//! Heatmap Image - Host image adapters
//!
//! The color operations work on plain [`ImageData`] buffers. This crate
//! converts between those buffers and the image types of the
//! [`image`] crate, so applications can pass their own images in and get
//! the image type they need back.
//!
//! - [`HostImage`]: output types an `ImageData` can be turned into
//! - [`from_rgba_image`] / [`from_dynamic_image`]: input conversion
//! - [`grayscale_image`] / [`pseudocolor_image`]: operations on `RgbaImage`
//!
//! No file decoding or encoding happens here.
//!
//! # Example
//!
//! ```
//! use heatmap_color::PseudocolorOptions;
//! use heatmap_image::pseudocolor_image;
//! use image::{Rgba, RgbaImage};
//!
//! let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
//! let out: RgbaImage = pseudocolor_image(&img, &PseudocolorOptions::default()).unwrap();
//! assert_eq!(out.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
//! ```

mod error;

pub use error::{ImageError, ImageResult};

use heatmap_color::{GrayscaleOptions, PseudocolorOptions, grayscale, pseudocolor};
use heatmap_core::{ColorDepth, ImageData};
use image::{DynamicImage, GrayAlphaImage, GrayImage, ImageBuffer, Pixel, RgbImage, RgbaImage};

/// An image representation that [`ImageData`] can be converted into.
pub trait HostImage: Sized {
    /// Build `Self` from a pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `Self` cannot hold the buffer's color depth.
    fn from_image_data(data: ImageData) -> ImageResult<Self>;
}

impl HostImage for ImageData {
    fn from_image_data(data: ImageData) -> ImageResult<Self> {
        Ok(data)
    }
}

impl HostImage for RgbaImage {
    fn from_image_data(data: ImageData) -> ImageResult<Self> {
        into_buffer(data, ColorDepth::Rgba)
    }
}

impl HostImage for GrayImage {
    fn from_image_data(data: ImageData) -> ImageResult<Self> {
        into_buffer(data, ColorDepth::Gray)
    }
}

impl HostImage for DynamicImage {
    fn from_image_data(data: ImageData) -> ImageResult<Self> {
        Ok(match data.depth() {
            ColorDepth::Gray => DynamicImage::ImageLuma8(into_buffer(data, ColorDepth::Gray)?),
            ColorDepth::GrayAlpha => DynamicImage::ImageLumaA8(into_buffer::<GrayAlphaImage>(
                data,
                ColorDepth::GrayAlpha,
            )?),
            ColorDepth::Rgb => {
                DynamicImage::ImageRgb8(into_buffer::<RgbImage>(data, ColorDepth::Rgb)?)
            }
            ColorDepth::Rgba => DynamicImage::ImageRgba8(into_buffer(data, ColorDepth::Rgba)?),
        })
    }
}

fn into_buffer<B>(data: ImageData, depth: ColorDepth) -> ImageResult<B>
where
    B: FromRaw,
{
    data.check_color_depth(depth)?;
    let (width, height) = (data.width(), data.height());
    B::from_raw_buffer(width, height, data.into_data())
        .ok_or(ImageError::BufferMismatch { width, height })
}

/// `ImageBuffer::from_raw` for 8-bit buffers of any pixel type.
trait FromRaw: Sized {
    fn from_raw_buffer(width: u32, height: u32, raw: Vec<u8>) -> Option<Self>;
}

impl<P> FromRaw for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn from_raw_buffer(width: u32, height: u32, raw: Vec<u8>) -> Option<Self> {
        ImageBuffer::<P, Vec<u8>>::from_raw(width, height, raw)
    }
}

/// Copy an `RgbaImage` into an [`ImageData`].
///
/// # Errors
///
/// Returns an error for an empty image.
pub fn from_rgba_image(image: &RgbaImage) -> ImageResult<ImageData> {
    Ok(ImageData::from_rgba(
        image.as_raw().clone(),
        image.width(),
        image.height(),
    )?)
}

/// Convert any `DynamicImage` to RGBA8 and wrap it as [`ImageData`].
///
/// 16-bit and floating-point images are reduced to 8 bits per channel.
pub fn from_dynamic_image(image: &DynamicImage) -> ImageResult<ImageData> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(rgba.into_raw(), width, height)?)
}

/// Run [`grayscale`] on an `RgbaImage`.
///
/// Pick `DynamicImage` as the output type to accept both the replicated
/// RGBA result and the monochrome one.
pub fn grayscale_image<T: HostImage>(
    image: &RgbaImage,
    options: &GrayscaleOptions,
) -> ImageResult<T> {
    let input = from_rgba_image(image)?;
    let output = grayscale(&input, options)?;
    tracing::debug!(depth = output.depth().channels(), "grayscale_image");
    T::from_image_data(output)
}

/// Run [`pseudocolor`] on an `RgbaImage`.
pub fn pseudocolor_image<T: HostImage>(
    image: &RgbaImage,
    options: &PseudocolorOptions,
) -> ImageResult<T> {
    let input = from_rgba_image(image)?;
    T::from_image_data(pseudocolor(&input, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba};

    #[test]
    fn test_rgba_roundtrip_keeps_layout() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 200]));
        let data = from_rgba_image(&img).unwrap();
        assert_eq!(data.pixel(2, 1).unwrap(), &[2, 1, 7, 200]);
        let back = RgbaImage::from_image_data(data).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_gray_image_requires_single_channel() {
        let data = ImageData::from_rgba(vec![0; 4], 1, 1).unwrap();
        let err = GrayImage::from_image_data(data).unwrap_err();
        assert!(matches!(err, ImageError::Core(_)));

        let data = ImageData::from_gray(vec![5, 6], 2, 1).unwrap();
        let gray = GrayImage::from_image_data(data).unwrap();
        assert_eq!(gray.get_pixel(1, 0), &Luma([6]));
    }

    #[test]
    fn test_dynamic_image_follows_depth() {
        let cases = [
            (1, vec![1u8, 2]),
            (2, vec![1, 2, 3, 4]),
            (3, vec![1, 2, 3, 4, 5, 6]),
            (4, vec![1, 2, 3, 4, 5, 6, 7, 8]),
        ];
        for (channels, raw) in cases {
            let data = ImageData::new(raw, 2, 1).unwrap();
            let dynamic = DynamicImage::from_image_data(data).unwrap();
            assert_eq!(dynamic.color().channel_count(), channels);
            assert_eq!(dynamic.width(), 2);
        }
    }

    #[test]
    fn test_from_dynamic_converts_to_rgba() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([90])));
        let data = from_dynamic_image(&gray).unwrap();
        assert_eq!(data.depth(), ColorDepth::Rgba);
        assert_eq!(data.pixel(0, 0).unwrap(), &[90, 90, 90, 255]);
    }

    #[test]
    fn test_monochrome_grayscale_as_dynamic() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 10]));
        let opts = GrayscaleOptions::default().with_monochrome(true);
        let out: DynamicImage = grayscale_image(&img, &opts).unwrap();
        assert!(matches!(out, DynamicImage::ImageLuma8(_)));

        let err = grayscale_image::<RgbaImage>(&img, &opts).unwrap_err();
        assert!(matches!(err, ImageError::Core(_)));
    }
}
