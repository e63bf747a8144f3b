//! Entry point that turns an algorithm name into a dithered buffer.

use crate::dither::{Dither, DitherAlgorithm};
use crate::error::DitherError;
use crate::raster::RasterBuffer;
use crate::registry;

/// Resolve `name` and dither `buffer` with it.
///
/// The name is resolved before any pixel is touched, so an unknown name
/// returns [`DitherError::UnknownAlgorithm`] and drops the buffer unchanged.
///
/// ```
/// use halftone::{dither, RasterBuffer};
///
/// let buffer = RasterBuffer::filled(2, 2, [128, 128, 128, 255]);
/// let out = dither(buffer, "floyd-steinberg").unwrap();
/// assert_eq!(&out.pixels()[..4], &[255, 255, 255, 255]);
/// assert!(out.pixels().iter().all(|&v| v == 0 || v == 255));
/// ```
pub fn dither(mut buffer: RasterBuffer, name: &str) -> Result<RasterBuffer, DitherError> {
    let algorithm = resolve(name)?;
    algorithm.apply(&mut buffer);
    Ok(buffer)
}

/// Look up `name`, mapping a miss to [`DitherError::UnknownAlgorithm`].
pub fn resolve(name: &str) -> Result<DitherAlgorithm, DitherError> {
    registry::lookup(name).ok_or_else(|| DitherError::UnknownAlgorithm(name.to_string()))
}

impl DitherAlgorithm {
    /// Run this algorithm in place on an already-resolved buffer.
    pub fn apply(&self, buffer: &mut RasterBuffer) {
        self.dither(buffer);
    }
}
