//! Heatmap - Rainbow pseudocolor for RGBA pixel buffers
//!
//! Turns an image into a blue-to-red false-color heatmap in two steps:
//!
//! 1. Reduce the image to grayscale ([`color::grayscale`])
//! 2. Map each gray level through three rainbow lookup tables
//!    ([`color::pseudocolor`])
//!
//! # Example
//!
//! ```
//! use heatmap::ImageData;
//! use heatmap::color::{pseudocolor, PseudocolorOptions};
//!
//! // Black turns blue, alpha is kept
//! let img = ImageData::from_rgba(vec![0, 0, 0, 255], 1, 1).unwrap();
//! let out = pseudocolor(&img, &PseudocolorOptions::default()).unwrap();
//! assert_eq!(out.data(), &[0, 0, 255, 255]);
//! ```
//!
//! # Features
//!
//! - `image` (default): conversions to and from the `image` crate, under
//!   [`image`]

// Re-export core types (primary data structures used everywhere)
pub use heatmap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use heatmap_color as color;
#[cfg(feature = "image")]
pub use heatmap_image as image;
