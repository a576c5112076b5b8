//! Error types for spectra-core operations.
//!
//! # Usage
//!
//! ```rust
//! use spectra_core::{Error, Plane};
//!
//! let err = Plane::from_data(4, 4, vec![0.0f32; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building planes.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid plane dimensions.
    ///
    /// Returned when width or height is zero, or when the sample buffer
    /// does not hold exactly `width * height` elements.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
