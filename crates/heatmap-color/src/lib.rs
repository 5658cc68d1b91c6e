//! Heatmap Color - Grayscale reduction and rainbow pseudocolor
//!
//! This crate provides the two color operations of the library:
//!
//! - **Grayscale** ([`grayscale`]): luma, single-channel or average reduction
//! - **Lookup tables** ([`lut`]): the red, green and blue rainbow curves
//! - **Pseudocolor** ([`pseudocolor`]): gray level to blue-to-red false color
//!
//! Both operations take an RGBA [`ImageData`](heatmap_core::ImageData) and
//! return a new one; inputs are never modified.

pub mod error;
pub mod grayscale;
pub mod lut;
pub mod pseudocolor;

// Re-export core types
pub use heatmap_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export grayscale types and functions
pub use grayscale::{
    // Types
    Channel,
    GrayscaleMethod,
    GrayscaleMode,
    GrayscaleOptions,
    // Functions
    grayscale,
    rgb_to_gray,
    rgb_to_gray_average,
};

// Re-export lookup table types and functions
pub use lut::{LookupTable, RainbowLut, blue_curve, build_table, green_curve, red_curve};

// Re-export pseudocolor types and functions
pub use pseudocolor::{PseudocolorOptions, pseudocolor};
