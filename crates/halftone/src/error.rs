//! Error type for the halftone crate.

use std::fmt;

/// Errors produced by raster construction, pixel access and dispatch.
///
/// # Example
///
/// ```
/// use halftone::{dither, DitherError, RasterBuffer};
///
/// let buffer = RasterBuffer::from_rgba(1, 1, vec![0, 0, 0, 255]).unwrap();
/// let err = dither(buffer, "no-such-algorithm").unwrap_err();
/// assert!(matches!(err, DitherError::UnknownAlgorithm(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// The algorithm name is not registered.
    UnknownAlgorithm(String),
    /// Pixel storage length does not match `width * height * channels`.
    BufferSize {
        /// Length required by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// A pixel coordinate or channel lies outside the raster.
    OutOfBounds {
        /// Column
        x: u32,
        /// Row
        y: u32,
        /// Channel index
        channel: u32,
    },
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::UnknownAlgorithm(name) => {
                write!(f, "unknown dithering algorithm: {}", name)
            }
            DitherError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, dimensions require {}",
                    actual, expected
                )
            }
            DitherError::OutOfBounds { x, y, channel } => {
                write!(f, "pixel ({}, {}) channel {} is out of bounds", x, y, channel)
            }
        }
    }
}

impl std::error::Error for DitherError {}
