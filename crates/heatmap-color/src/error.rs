//! Error types for heatmap-color

use thiserror::Error;

/// Errors that can occur during grayscale and pseudocolor operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Core library error, including buffer/size mismatches
    #[error("core error: {0}")]
    Core(#[from] heatmap_core::Error),

    /// Invalid option value
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl ColorError {
    /// Whether this error reports a buffer that is not `width * height * 4` bytes.
    pub fn is_invalid_color_depth(&self) -> bool {
        matches!(
            self,
            ColorError::Core(heatmap_core::Error::InvalidColorDepth { .. })
        )
    }
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
