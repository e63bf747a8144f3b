//! PNG to RGBA raster and back.

use std::io::Cursor;

use halftone::RasterBuffer;

use crate::error::{DecodeError, EncodeError};

/// Largest accepted image, in pixels.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Decode any PNG into an 8-bit RGBA raster.
///
/// Palettes are expanded, `tRNS` becomes alpha, 16-bit samples are
/// stripped to 8 bits and gray is replicated into R, G and B. Only the
/// first frame of an animated PNG is read.
pub fn decode(bytes: &[u8]) -> Result<RasterBuffer, DecodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(DecodeError::TooLarge { width, height });
    }

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let data = &buf[..frame.buffer_size()];

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(DecodeError::Unsupported {
            color_type: frame.color_type,
            bit_depth: frame.bit_depth,
        });
    }

    let pixel_count = width as usize * height as usize;
    let mut rgba = Vec::with_capacity(pixel_count * 4);
    match frame.color_type {
        png::ColorType::Rgba => rgba.extend_from_slice(data),
        png::ColorType::Rgb => {
            for px in data.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for px in data.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
        }
        png::ColorType::Grayscale => {
            for &g in data {
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
        }
        color_type => {
            return Err(DecodeError::Unsupported {
                color_type,
                bit_depth: frame.bit_depth,
            })
        }
    }

    tracing::debug!(
        width,
        height,
        source = ?reader.info().color_type,
        "Decoded PNG"
    );

    Ok(RasterBuffer::from_rgba(width, height, rgba)?)
}

/// Encode a raster as an 8-bit RGBA PNG.
pub fn encode(buffer: &RasterBuffer) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.pixels())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Recompress PNG bytes with oxipng (zopfli + adaptive filter selection).
pub fn optimize(png_bytes: &[u8]) -> Result<Vec<u8>, EncodeError> {
    oxipng::optimize_from_memory(
        png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .map_err(|e| EncodeError::Optimize(e.to_string()))
}
