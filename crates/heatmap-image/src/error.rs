//! Error types for heatmap-image

use thiserror::Error;

/// Errors that can occur while converting to or from host images
#[derive(Debug, Error)]
pub enum ImageError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] heatmap_core::Error),

    /// Color operation error
    #[error("color error: {0}")]
    Color(#[from] heatmap_color::ColorError),

    /// The host image type rejected the buffer
    #[error("buffer does not fit a {width}x{height} image")]
    BufferMismatch { width: u32, height: u32 },
}

/// Result type for host image conversions
pub type ImageResult<T> = Result<T, ImageError>;
