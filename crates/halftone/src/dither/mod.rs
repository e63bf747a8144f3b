//! Dithering engines and the algorithm descriptors that drive them.
//!
//! Three engine families share one RGBA raster:
//!
//! - **Error diffusion**: binarize at 128 and spread the error with a
//!   [`DiffusionKernel`]. Eleven kernels are registered.
//! - **Ordered**: compare against a tiled [`ThresholdMatrix`].
//! - **Luminance threshold**: grayscale checkerboard with thresholds 85/170.
//!
//! All engines implement [`Dither`], and [`DitherAlgorithm`] wraps whichever
//! one a registry name resolves to.
//!
//! # Example
//!
//! ```
//! use halftone::{Dither, RasterBuffer, FLOYD_STEINBERG};
//!
//! let mut buffer = RasterBuffer::filled(4, 4, [128, 128, 128, 255]);
//! FLOYD_STEINBERG.dither(&mut buffer);
//! assert!(buffer.pixels().iter().all(|&v| v == 0 || v == 255));
//! ```

mod checkered;
mod error_diffusion;
mod kernel;
mod matrix;
mod ordered;

pub use checkered::{luma, EVEN_THRESHOLD, ODD_THRESHOLD};
pub use error_diffusion::{diffuse_sample, THRESHOLD};
pub use kernel::*;
pub use matrix::*;

use crate::raster::RasterBuffer;

/// An in-place dithering engine.
pub trait Dither {
    /// Dither `buffer` in place. Dimensions never change.
    fn dither(&self, buffer: &mut RasterBuffer);
}

impl Dither for DiffusionKernel {
    fn dither(&self, buffer: &mut RasterBuffer) {
        error_diffusion::diffuse(buffer, self);
    }
}

impl Dither for ThresholdMatrix {
    fn dither(&self, buffer: &mut RasterBuffer) {
        ordered::threshold(buffer, self);
    }
}

/// The checkerboard luminance engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LuminanceThreshold;

impl Dither for LuminanceThreshold {
    fn dither(&self, buffer: &mut RasterBuffer) {
        checkered::checker(buffer);
    }
}

/// Engine family, reported when listing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    ErrorDiffusion,
    Ordered,
    Luminance,
}

impl AlgorithmFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmFamily::ErrorDiffusion => "error-diffusion",
            AlgorithmFamily::Ordered => "ordered",
            AlgorithmFamily::Luminance => "luminance",
        }
    }
}

impl std::fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved algorithm: an engine plus the parameters it runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherAlgorithm {
    /// Error diffusion with the given kernel.
    ErrorDiffusion(&'static DiffusionKernel),
    /// Ordered dithering with the given matrix.
    OrderedThreshold(&'static ThresholdMatrix),
    /// Checkerboard luminance threshold.
    LuminanceThreshold,
}

impl DitherAlgorithm {
    /// Canonical registry name.
    pub fn name(&self) -> &'static str {
        match self {
            DitherAlgorithm::ErrorDiffusion(kernel) => kernel.name,
            DitherAlgorithm::OrderedThreshold(matrix) => matrix.name,
            DitherAlgorithm::LuminanceThreshold => "checkered",
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            DitherAlgorithm::ErrorDiffusion(_) => AlgorithmFamily::ErrorDiffusion,
            DitherAlgorithm::OrderedThreshold(_) => AlgorithmFamily::Ordered,
            DitherAlgorithm::LuminanceThreshold => AlgorithmFamily::Luminance,
        }
    }

    /// Whether every channel of the output is guaranteed to be 0 or 255.
    ///
    /// False for the checkerboard (alpha is untouched) and for kernels that
    /// push error back onto finished pixels.
    pub fn is_binary(&self) -> bool {
        match self {
            DitherAlgorithm::ErrorDiffusion(kernel) => kernel.is_causal(),
            DitherAlgorithm::OrderedThreshold(_) => true,
            DitherAlgorithm::LuminanceThreshold => false,
        }
    }
}

impl Dither for DitherAlgorithm {
    fn dither(&self, buffer: &mut RasterBuffer) {
        match self {
            DitherAlgorithm::ErrorDiffusion(kernel) => kernel.dither(buffer),
            DitherAlgorithm::OrderedThreshold(matrix) => matrix.dither(buffer),
            DitherAlgorithm::LuminanceThreshold => LuminanceThreshold.dither(buffer),
        }
    }
}
