//! Luminance threshold on a two-level checkerboard.
//!
//! Each pixel's Rec. 601 luma is compared against 85 on even squares
//! (`(x + y) % 2 == 0`) and 170 on odd ones. The resulting black or white
//! replaces R, G and B. Alpha is left alone.

use crate::raster::{RasterBuffer, RGBA_CHANNELS};

/// Threshold used where `x + y` is even.
pub const EVEN_THRESHOLD: u8 = 85;
/// Threshold used where `x + y` is odd.
pub const ODD_THRESHOLD: u8 = 170;

/// Rec. 601 luma, computed in `f64` and truncated.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) as u8
}

#[inline]
fn level(x: u32, y: u32) -> u8 {
    if (u64::from(x) + u64::from(y)) % 2 == 0 {
        EVEN_THRESHOLD
    } else {
        ODD_THRESHOLD
    }
}

pub fn checker(buffer: &mut RasterBuffer) {
    let width = buffer.width() as usize;
    if width == 0 {
        return;
    }

    for (index, pixel) in buffer
        .pixels_mut()
        .chunks_exact_mut(RGBA_CHANNELS as usize)
        .enumerate()
    {
        let x = (index % width) as u32;
        let y = (index / width) as u32;
        let bit = if luma(pixel[0], pixel[1], pixel[2]) < level(x, y) {
            0
        } else {
            255
        };
        pixel[..3].fill(bit);
    }
}
