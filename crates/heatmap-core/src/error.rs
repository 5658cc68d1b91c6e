//! Error types for heatmap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Heatmap core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length is not consistent with the image size and color depth
    #[error(
        "data and size of the image do not match: {len} bytes for {width}x{height} at {expected} channels"
    )]
    InvalidColorDepth {
        len: usize,
        width: u32,
        height: u32,
        expected: u32,
    },

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Channel count outside 1..=4
    #[error("unsupported color depth: {0} channels")]
    UnsupportedDepth(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for heatmap core operations
pub type Result<T> = std::result::Result<T, Error>;
