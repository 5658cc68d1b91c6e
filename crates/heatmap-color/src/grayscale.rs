//! Grayscale reduction
//!
//! Reduces an RGBA image to a single intensity per pixel using one of three
//! formulas:
//!
//! - **Luma**: ITU-R BT.601 weighted sum, `0.299*R + 0.587*G + 0.114*B`
//! - **Simple**: the raw value of one channel (`r`, `g` or `b`)
//! - **Average**: `(R + G + B) / 3`
//!
//! The result is either replicated into R, G and B with the original alpha
//! kept, or written as a single byte per pixel (monochrome output).
//!
//! # Examples
//!
//! ```
//! use heatmap_color::grayscale::{grayscale, Channel, GrayscaleMode, GrayscaleOptions};
//! use heatmap_core::ImageData;
//!
//! let img = ImageData::from_rgba(vec![200, 100, 50, 255], 1, 1).unwrap();
//! let options = GrayscaleOptions::default().with_mode(GrayscaleMode::Simple(Channel::Red));
//! let gray = grayscale(&img, &options).unwrap();
//! assert_eq!(gray.data(), &[200, 200, 200, 255]);
//! ```

use std::fmt;
use std::str::FromStr;

use heatmap_core::color;
use heatmap_core::{ColorDepth, ImageData};
use serde::{Deserialize, Serialize};

use crate::{ColorError, ColorResult};

/// Source channel for [`GrayscaleMode::Simple`].
///
/// Keyed by letter (`r`, `g`, `b`) in text form. [`Channel::from_index`]
/// accepts the numeric form (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "r")]
    Red,
    #[default]
    #[serde(rename = "g")]
    Green,
    #[serde(rename = "b")]
    Blue,
}

impl Channel {
    /// Create a channel from its byte offset within an RGBA pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] for anything but 0, 1 or 2.
    pub fn from_index(index: usize) -> ColorResult<Self> {
        match index {
            color::RED => Ok(Channel::Red),
            color::GREEN => Ok(Channel::Green),
            color::BLUE => Ok(Channel::Blue),
            _ => Err(ColorError::InvalidParameters(format!(
                "channel index must be 0, 1 or 2, got {index}"
            ))),
        }
    }

    /// Byte offset of this channel within an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => color::RED,
            Channel::Green => color::GREEN,
            Channel::Blue => color::BLUE,
        }
    }

    /// Single-letter name (`r`, `g` or `b`).
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s {
            "r" => Ok(Channel::Red),
            "g" => Ok(Channel::Green),
            "b" => Ok(Channel::Blue),
            _ => Err(ColorError::InvalidParameters(format!(
                "unknown channel '{s}', expected 'r', 'g' or 'b'"
            ))),
        }
    }
}

/// Name of a grayscale formula, as it appears in configuration.
///
/// The channel for `simple` is configured separately; see
/// [`GrayscaleOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrayscaleMethod {
    #[default]
    Luma,
    Simple,
    Average,
}

impl GrayscaleMethod {
    /// Configuration name (`luma`, `simple` or `average`).
    pub fn as_str(self) -> &'static str {
        match self {
            GrayscaleMethod::Luma => "luma",
            GrayscaleMethod::Simple => "simple",
            GrayscaleMethod::Average => "average",
        }
    }
}

impl fmt::Display for GrayscaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrayscaleMethod {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s {
            "luma" => Ok(GrayscaleMethod::Luma),
            "simple" => Ok(GrayscaleMethod::Simple),
            "average" => Ok(GrayscaleMethod::Average),
            _ => Err(ColorError::InvalidParameters(format!(
                "unknown grayscale mode '{s}', expected 'luma', 'simple' or 'average'"
            ))),
        }
    }
}

/// BT.601 weights in thousandths.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Grayscale reduction formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayscaleMode {
    /// BT.601 luma
    #[default]
    Luma,
    /// Raw value of one channel
    Simple(Channel),
    /// Unweighted mean of R, G and B
    Average,
}

impl GrayscaleMode {
    /// Compute the unrounded intensity of one pixel.
    #[inline]
    pub fn reduce(self, r: u8, g: u8, b: u8) -> f32 {
        match self {
            GrayscaleMode::Luma => {
                (LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32) as f32 / 1000.0
            }
            GrayscaleMode::Simple(channel) => [r, g, b][channel.index()] as f32,
            GrayscaleMode::Average => (r as f32 + g as f32 + b as f32) / 3.0,
        }
    }

    /// Compute the intensity of one pixel as an 8-bit value.
    ///
    /// Luma and average are evaluated in integers so that exact halves
    /// round away from zero, as [`color::clamp_to_u8`] does for table values.
    #[inline]
    pub fn reduce_u8(self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        let v = match self {
            // 1000 * (0.299 R + 0.587 G + 0.114 B), at most 255_000
            GrayscaleMode::Luma => (LUMA_R * r + LUMA_G * g + LUMA_B * b + 500) / 1000,
            GrayscaleMode::Simple(channel) => [r, g, b][channel.index()],
            // round((r + g + b) / 3)
            GrayscaleMode::Average => (2 * (r + g + b) + 3) / 6,
        };
        v.min(255) as u8
    }

    /// The configuration name of this formula.
    pub fn method(self) -> GrayscaleMethod {
        match self {
            GrayscaleMode::Luma => GrayscaleMethod::Luma,
            GrayscaleMode::Simple(_) => GrayscaleMethod::Simple,
            GrayscaleMode::Average => GrayscaleMethod::Average,
        }
    }
}

/// Options for [`grayscale`].
///
/// Field names match the configuration keys `mode`, `channel` and
/// `monochrome`. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayscaleOptions {
    /// Reduction formula
    pub mode: GrayscaleMethod,
    /// Source channel, used only when `mode` is `simple`
    pub channel: Channel,
    /// Emit one byte per pixel instead of replicated RGBA
    pub monochrome: bool,
}

impl GrayscaleOptions {
    /// Set the formula (and the channel, for `Simple`).
    pub fn with_mode(mut self, mode: GrayscaleMode) -> Self {
        self.mode = mode.method();
        if let GrayscaleMode::Simple(channel) = mode {
            self.channel = channel;
        }
        self
    }

    /// Select single-channel output.
    pub fn with_monochrome(mut self, monochrome: bool) -> Self {
        self.monochrome = monochrome;
        self
    }

    /// The formula these options select.
    pub fn reduction_mode(&self) -> GrayscaleMode {
        match self.mode {
            GrayscaleMethod::Luma => GrayscaleMode::Luma,
            GrayscaleMethod::Simple => GrayscaleMode::Simple(self.channel),
            GrayscaleMethod::Average => GrayscaleMode::Average,
        }
    }
}

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    GrayscaleMode::Luma.reduce_u8(r, g, b)
}

/// Convert RGB to grayscale as the mean of the three channels
#[inline]
pub fn rgb_to_gray_average(r: u8, g: u8, b: u8) -> u8 {
    GrayscaleMode::Average.reduce_u8(r, g, b)
}

/// Reduce an RGBA image to grayscale.
///
/// Output is `width * height * 4` bytes with the intensity copied into
/// R, G and B and the input alpha passed through, or `width * height`
/// bytes when `options.monochrome` is set.
///
/// # Errors
///
/// Returns an invalid color depth error (see
/// [`ColorError::is_invalid_color_depth`]) if the input is not RGBA.
pub fn grayscale(image: &ImageData, options: &GrayscaleOptions) -> ColorResult<ImageData> {
    image.check_color_depth(ColorDepth::Rgba)?;

    let mode = options.reduction_mode();
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        ?mode,
        monochrome = options.monochrome,
        "grayscale"
    );

    let depth = if options.monochrome {
        ColorDepth::Gray
    } else {
        ColorDepth::Rgba
    };
    let mut data = Vec::with_capacity(image.pixel_count() * depth.channels() as usize);

    for pixel in image.pixels() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        let v = mode.reduce_u8(r, g, b);
        if options.monochrome {
            data.push(v);
        } else {
            data.extend_from_slice(&[v, v, v, a]);
        }
    }

    Ok(ImageData::with_depth(
        data,
        image.width(),
        image.height(),
        depth,
    )?)
}
