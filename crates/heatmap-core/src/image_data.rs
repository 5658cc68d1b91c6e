//! ImageData - The pixel buffer container
//!
//! `ImageData` pairs an interleaved 8-bit pixel buffer with its width and
//! height. The number of channels per pixel (the color depth) is derived
//! from the buffer length.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major, top row first
//! - Channels are interleaved per pixel
//! - For 4-channel data the byte order is `[R, G, B, A]`
//!
//! # Ownership model
//!
//! `ImageData` owns its buffer. Operations in this library never modify an
//! input image in place; they always allocate and return a new `ImageData`.

use crate::error::{Error, Result};

/// Number of interleaved channels per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ColorDepth {
    /// Single-channel grayscale
    Gray = 1,
    /// Grayscale with alpha
    GrayAlpha = 2,
    /// RGB without alpha
    Rgb = 3,
    /// RGBA, the working format of every color operation
    #[default]
    Rgba = 4,
}

impl ColorDepth {
    /// Create a `ColorDepth` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if `channels` is not 1, 2, 3, or 4.
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(ColorDepth::Gray),
            2 => Ok(ColorDepth::GrayAlpha),
            3 => Ok(ColorDepth::Rgb),
            4 => Ok(ColorDepth::Rgba),
            _ => Err(Error::UnsupportedDepth(channels)),
        }
    }

    /// Derive the color depth from a buffer length and image size.
    ///
    /// The depth must be a whole number of channels in 1..=4.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorDepth`] whenever `len` does not fit the
    /// size: an image with no pixels, a length that is not a multiple of
    /// the pixel count, or a channel count of 0 or above 4.
    pub fn detect(len: usize, width: u32, height: u32) -> Result<Self> {
        let mismatch = || Error::InvalidColorDepth {
            len,
            width,
            height,
            expected: ColorDepth::Rgba.channels(),
        };
        let pixels = pixel_count(width, height).map_err(|_| mismatch())?;
        if len % pixels != 0 {
            return Err(mismatch());
        }
        u32::try_from(len / pixels)
            .ok()
            .and_then(|channels| Self::from_channels(channels).ok())
            .ok_or_else(mismatch)
    }

    /// Get the number of channels per pixel.
    pub fn channels(self) -> u32 {
        self as u32
    }

    /// Check whether this depth carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorDepth::GrayAlpha | ColorDepth::Rgba)
    }
}

/// Number of pixels in a `width` x `height` image.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either side is zero or the
/// product overflows `usize`.
pub fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n > 0)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Check that `len` bytes hold exactly `width * height` pixels at `depth`.
///
/// # Errors
///
/// Returns [`Error::InvalidColorDepth`] on any mismatch, including a zero
/// sized image.
pub fn check_color_depth(len: usize, width: u32, height: u32, depth: ColorDepth) -> Result<()> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(depth.channels() as usize));
    match expected_len {
        Some(n) if n > 0 && n == len => Ok(()),
        _ => Err(Error::InvalidColorDepth {
            len,
            width,
            height,
            expected: depth.channels(),
        }),
    }
}

/// An interleaved 8-bit pixel buffer with its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageData {
    data: Vec<u8>,
    width: u32,
    height: u32,
    depth: ColorDepth,
}

impl ImageData {
    /// Wrap a pixel buffer, deriving its color depth from the length.
    ///
    /// Any whole channel count from 1 to 4 is accepted here. Color
    /// operations then require [`ColorDepth::Rgba`] on top of this.
    ///
    /// # Errors
    ///
    /// See [`ColorDepth::detect`].
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let depth = ColorDepth::detect(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
            depth,
        })
    }

    /// Wrap a pixel buffer that must hold exactly `depth` channels per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorDepth`] if the length does not match.
    pub fn with_depth(data: Vec<u8>, width: u32, height: u32, depth: ColorDepth) -> Result<Self> {
        check_color_depth(data.len(), width, height, depth)?;
        Ok(Self {
            data,
            width,
            height,
            depth,
        })
    }

    /// Wrap an RGBA buffer (`width * height * 4` bytes).
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        Self::with_depth(data, width, height, ColorDepth::Rgba)
    }

    /// Wrap a single-channel buffer (`width * height` bytes).
    pub fn from_gray(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        Self::with_depth(data, width, height, ColorDepth::Gray)
    }

    /// Create an image with every pixel set to `pixel`.
    ///
    /// The color depth is the length of `pixel`.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized image or a `pixel` slice that is
    /// not 1..=4 channels long.
    pub fn filled(width: u32, height: u32, pixel: &[u8]) -> Result<Self> {
        let channels = u32::try_from(pixel.len()).map_err(|_| Error::UnsupportedDepth(u32::MAX))?;
        let depth = ColorDepth::from_channels(channels)?;
        let count = pixel_count(width, height)?;
        let data = pixel.repeat(count);
        Ok(Self {
            data,
            width,
            height,
            depth,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel.
    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The raw interleaved buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as channel slices.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.depth.channels() as usize)
    }

    /// Get the channels of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Result<&[u8]> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.pixel_count(),
            });
        }
        let channels = self.depth.channels() as usize;
        let start = (y as usize * self.width as usize + x as usize) * channels;
        Ok(&self.data[start..start + channels])
    }

    /// Verify this image has exactly `depth` channels per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorDepth`] otherwise.
    pub fn check_color_depth(&self, depth: ColorDepth) -> Result<()> {
        check_color_depth(self.data.len(), self.width, self.height, depth)
    }
}
