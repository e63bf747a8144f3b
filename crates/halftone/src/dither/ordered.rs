//! Ordered (threshold matrix) dithering.

use crate::raster::{RasterBuffer, RGBA_CHANNELS};

use super::matrix::ThresholdMatrix;

/// Threshold every channel of every pixel against the tiled matrix.
///
/// A sample becomes 255 when it is strictly greater than the threshold at
/// its position, 0 otherwise. No error is propagated, so the result of each
/// pixel depends only on its own value and position.
pub fn threshold(buffer: &mut RasterBuffer, matrix: &ThresholdMatrix) {
    let width = buffer.width() as usize;
    if width == 0 {
        return;
    }
    let stride = RGBA_CHANNELS as usize;

    for (index, pixel) in buffer.pixels_mut().chunks_exact_mut(stride).enumerate() {
        let x = (index % width) as u32;
        let y = (index / width) as u32;
        let level = matrix.threshold(x, y);
        for sample in pixel.iter_mut() {
            *sample = if *sample > level { 255 } else { 0 };
        }
    }
}
