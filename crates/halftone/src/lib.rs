//! halftone: binary dithering of RGBA rasters
//!
//! The crate reduces an 8-bit RGBA image to black and white per channel,
//! either by error diffusion or by comparing against a threshold matrix.
//! Every algorithm is a data record (a kernel or a matrix) run by one of
//! three shared engines.
//!
//! # Quick Start
//!
//! ```
//! use halftone::{dither, RasterBuffer};
//!
//! let buffer = RasterBuffer::filled(8, 8, [90, 160, 220, 255]);
//! let out = dither(buffer, "atkinson").unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```
//!
//! # Resolving Once
//!
//! Callers that dither many buffers with the same algorithm can resolve the
//! name up front:
//!
//! ```
//! use halftone::{registry, RasterBuffer};
//!
//! let bayer = registry::lookup("Bayer_4x4").unwrap();
//! let mut buffer = RasterBuffer::filled(4, 4, [200, 200, 200, 255]);
//! bayer.apply(&mut buffer);
//! assert_eq!(buffer.get(0, 3, 0), Some(0));
//! ```
//!
//! # Algorithms
//!
//! | Family | Names |
//! |--------|-------|
//! | Error diffusion | floyd-steinberg, false-floyd-steinberg, atkinson, burkes, sierra, sierra-lite, sierra-two-row, jarvis-judice-ninke, stucki, knoll, lattice-boltzmann |
//! | Ordered | bayer-2x2, bayer-4x4, bayer-8x8, clustered-dot-4x4 |
//! | Luminance | checkered |
//!
//! Error diffusion and ordered engines treat alpha like any other channel.
//! The checkered engine writes only R, G and B.

pub mod dispatch;
pub mod dither;
pub mod error;
pub mod raster;
pub mod registry;

#[cfg(test)]
mod domain_tests;

pub use dispatch::{dither, resolve};
pub use dither::{
    AlgorithmFamily, DiffusionKernel, Dither, DitherAlgorithm, LuminanceThreshold,
    ThresholdMatrix, ATKINSON, FLOYD_STEINBERG,
};
pub use error::DitherError;
pub use raster::RasterBuffer;
pub use registry::RegistryEntry;
