//! Scaling and blur, backed by `image::imageops`.

use halftone::{DitherError, RasterBuffer};
use image::imageops::{self, FilterType};
use image::RgbaImage;

fn into_image(buffer: RasterBuffer) -> Result<RgbaImage, DitherError> {
    let (width, height) = buffer.dimensions();
    let actual = buffer.pixels().len();
    RgbaImage::from_raw(width, height, buffer.into_pixels()).ok_or(DitherError::BufferSize {
        expected: width as usize * height as usize * 4,
        actual,
    })
}

fn from_image(image: RgbaImage) -> Result<RasterBuffer, DitherError> {
    let (width, height) = image.dimensions();
    RasterBuffer::from_rgba(width, height, image.into_raw())
}

/// Size of a `width × height` image scaled to `percent`, at least 1×1.
pub fn scaled_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let scale = |v: u32| ((u64::from(v) * u64::from(percent) / 100) as u32).max(1);
    (scale(width), scale(height))
}

/// Resample to exactly `width × height`.
///
/// Returns the buffer untouched when the size already matches or either
/// side is empty.
pub fn resize(
    buffer: RasterBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterBuffer, DitherError> {
    let (w, h) = buffer.dimensions();
    if (w, h) == (width, height) || w == 0 || h == 0 || width == 0 || height == 0 {
        return Ok(buffer);
    }
    let image = into_image(buffer)?;
    from_image(imageops::resize(&image, width, height, filter))
}

/// Shrink to `percent` of the original size with a Lanczos filter.
///
/// `percent >= 100` is a no-op.
pub fn downscale(buffer: RasterBuffer, percent: u32) -> Result<RasterBuffer, DitherError> {
    if percent >= 100 {
        return Ok(buffer);
    }
    let (width, height) = scaled_dimensions(buffer.width(), buffer.height(), percent);
    resize(buffer, width, height, FilterType::Lanczos3)
}

/// Gaussian blur of R, G and B with standard deviation `sigma`.
///
/// Alpha is left as it was.
pub fn blur(buffer: &mut RasterBuffer, sigma: f32) -> Result<(), DitherError> {
    let (width, height) = buffer.dimensions();
    if sigma <= 0.0 || width == 0 || height == 0 {
        return Ok(());
    }
    let image = into_image(buffer.clone())?;
    let blurred = imageops::blur(&image, sigma);

    for (dst, src) in buffer
        .pixels_mut()
        .chunks_exact_mut(4)
        .zip(blurred.as_raw().chunks_exact(4))
    {
        dst[..3].copy_from_slice(&src[..3]);
    }
    Ok(())
}
