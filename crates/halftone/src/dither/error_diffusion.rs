//! Error diffusion engine shared by every kernel.
//!
//! Pixels are visited row-major, left to right, channel by channel. Each
//! sample is binarized at 128, written back immediately, and its
//! quantization error is pushed to the kernel's neighbors through
//! [`RasterBuffer::try_diffuse`]. Later samples therefore see the
//! already-clamped accumulated value, never a deferred error sum.

use crate::raster::RasterBuffer;

use super::kernel::DiffusionKernel;

/// Samples below this value become 0, the rest 255.
pub const THRESHOLD: u8 = 128;

#[inline]
pub(crate) fn binarize(value: u8) -> u8 {
    if value < THRESHOLD {
        0
    } else {
        255
    }
}

/// Run error diffusion over the whole buffer with `kernel`.
///
/// All four channels are processed independently and identically,
/// including alpha.
pub fn diffuse(buffer: &mut RasterBuffer, kernel: &DiffusionKernel) {
    let taps: Vec<(i32, i32, f32)> = kernel.taps().collect();
    let (width, height) = buffer.dimensions();
    let channels = buffer.channels();

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                diffuse_sample(buffer, &taps, x, y, c);
            }
        }
    }
}

/// Quantize one sample and spread its error over `taps`.
///
/// Returns the quantization error (`old - new`), or `None` when the sample
/// lies outside the buffer.
pub fn diffuse_sample(
    buffer: &mut RasterBuffer,
    taps: &[(i32, i32, f32)],
    x: u32,
    y: u32,
    channel: u32,
) -> Option<i32> {
    let old = buffer.get(x, y, channel)?;
    let new = binarize(old);
    buffer.set(x, y, channel, new).ok()?;

    let error = i32::from(old) - i32::from(new);
    if error != 0 {
        let spread = error as f32;
        for &(dx, dy, weight) in taps {
            buffer.try_diffuse(
                i64::from(x) + i64::from(dx),
                i64::from(y) + i64::from(dy),
                channel,
                spread * weight,
            );
        }
    }
    Some(error)
}
