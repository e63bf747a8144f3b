//! Owned RGBA pixel storage with bounds-checked access.

use crate::error::DitherError;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const RGBA_CHANNELS: u32 = 4;

/// Row-major, channel-interleaved RGBA raster.
///
/// The pixel vector always holds exactly `width * height * 4` bytes. Engines
/// mutate it in place; it is never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap existing RGBA bytes.
    ///
    /// Fails with [`DitherError::BufferSize`] when `pixels.len()` does not
    /// equal `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DitherError> {
        let expected = width as usize * height as usize * RGBA_CHANNELS as usize;
        if pixels.len() != expected {
            return Err(DitherError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let pixels = rgba.iter().copied().cycle().take(count * 4).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        RGBA_CHANNELS
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw bytes. The length cannot change through a slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte offset of `(x, y, channel)`, or `None` outside the raster.
    #[inline]
    fn offset(&self, x: u32, y: u32, channel: u32) -> Option<usize> {
        if x >= self.width || y >= self.height || channel >= RGBA_CHANNELS {
            return None;
        }
        let pixel = y as usize * self.width as usize + x as usize;
        Some(pixel * RGBA_CHANNELS as usize + channel as usize)
    }

    /// Read one channel value.
    #[inline]
    pub fn get(&self, x: u32, y: u32, channel: u32) -> Option<u8> {
        self.offset(x, y, channel).map(|i| self.pixels[i])
    }

    /// Write one channel value.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, channel: u32, value: u8) -> Result<(), DitherError> {
        let i = self
            .offset(x, y, channel)
            .ok_or(DitherError::OutOfBounds { x, y, channel })?;
        self.pixels[i] = value;
        Ok(())
    }

    /// Add `delta` to a neighbor's channel value, clamping to `[0, 255]`.
    ///
    /// Signed coordinates let callers pass `x + dx` directly. The sum is
    /// computed in `f32` and truncated toward zero after clamping. Returns
    /// `false` without touching anything when the target is outside the raster.
    #[inline]
    pub fn try_diffuse(&mut self, x: i64, y: i64, channel: u32, delta: f32) -> bool {
        if x < 0 || y < 0 || x > u32::MAX as i64 || y > u32::MAX as i64 {
            return false;
        }
        let Some(i) = self.offset(x as u32, y as u32, channel) else {
            return false;
        };
        let value = f32::from(self.pixels[i]) + delta;
        self.pixels[i] = value.clamp(0.0, 255.0) as u8;
        true
    }
}
