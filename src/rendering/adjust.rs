//! Tone adjustments applied before dithering.
//!
//! All adjustments touch R, G and B only. Neutral parameters leave the
//! raster byte-identical.

use halftone::{DitherError, RasterBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::AdjustConfig;
use crate::rendering::resample;

/// ITU-R 601-2 luma with 16-bit fixed-point weights, rounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((19595 * u32::from(r) + 38470 * u32::from(g) + 7471 * u32::from(b) + 0x8000) >> 16) as u8
}

/// Run every configured adjustment in order: grayscale, contrast, tone
/// curve, blur, pixelation, then noise.
///
/// Scaling is not applied here; the pipeline shrinks before and restores
/// after dithering.
pub fn apply(buffer: &mut RasterBuffer, config: &AdjustConfig) -> Result<(), DitherError> {
    if config.grayscale {
        grayscale(buffer);
    }
    if config.contrast != 1.0 {
        contrast(buffer, config.contrast);
    }
    if config.midtones != 1.0 || config.highlights != 1.0 {
        tone_curve(buffer, config.midtones, config.highlights);
    }
    resample::blur(buffer, config.blur)?;
    pixelate(buffer, config.pixelation);
    add_noise(buffer, config.noise, config.seed);
    Ok(())
}

/// Replace R, G and B with the pixel's luma.
pub fn grayscale(buffer: &mut RasterBuffer) {
    for px in buffer.pixels_mut().chunks_exact_mut(4) {
        let l = luma(px[0], px[1], px[2]);
        px[..3].fill(l);
    }
}

/// Mean luma over all pixels, rounded to the nearest integer.
pub fn mean_luma(buffer: &RasterBuffer) -> u8 {
    let mut sum = 0u64;
    let mut count = 0u64;
    for px in buffer.pixels().chunks_exact(4) {
        sum += u64::from(luma(px[0], px[1], px[2]));
        count += 1;
    }
    if count == 0 {
        return 0;
    }
    ((sum as f64 / count as f64) + 0.5) as u8
}

/// Scale each color sample away from (or toward) the mean luma.
pub fn contrast(buffer: &mut RasterBuffer, factor: f32) {
    let mean = f32::from(mean_luma(buffer));
    let lut = build_lut(|v| mean + factor * (v - mean));
    apply_lut(buffer, &lut);
}

/// Gamma (`midtones`) followed by a gain (`highlights`).
pub fn tone_curve(buffer: &mut RasterBuffer, midtones: f32, highlights: f32) {
    let lut = build_lut(|v| {
        // 255 * (v / 255) is not exact in f32
        let curved = if midtones == 1.0 {
            v
        } else {
            255.0 * (v / 255.0).powf(1.0 / midtones)
        };
        (curved * highlights).min(255.0)
    });
    apply_lut(buffer, &lut);
}

/// Fill every `size`-square block with the color of its center sample.
///
/// Sizes 0 and 1 leave the buffer unchanged.
pub fn pixelate(buffer: &mut RasterBuffer, size: u32) {
    if size <= 1 {
        return;
    }
    let (width, height) = buffer.dimensions();
    let stride = width as usize * 4;
    let pixels = buffer.pixels_mut();

    for by in (0..height).step_by(size as usize) {
        let bh = size.min(height - by);
        for bx in (0..width).step_by(size as usize) {
            let bw = size.min(width - bx);
            let (cx, cy) = (bx + bw / 2, by + bh / 2);
            let center = cy as usize * stride + cx as usize * 4;
            let color = [pixels[center], pixels[center + 1], pixels[center + 2]];

            for y in by..by + bh {
                for x in bx..bx + bw {
                    let i = y as usize * stride + x as usize * 4;
                    pixels[i..i + 3].copy_from_slice(&color);
                }
            }
        }
    }
}

/// Add uniform integer noise in `[-amount, amount)` to each color sample.
///
/// With a seed the result is reproducible; without one the generator is
/// seeded from the OS.
pub fn add_noise(buffer: &mut RasterBuffer, amount: u8, seed: Option<u64>) {
    if amount == 0 {
        return;
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let amount = i16::from(amount);
    for px in buffer.pixels_mut().chunks_exact_mut(4) {
        for sample in &mut px[..3] {
            let delta: i16 = rng.gen_range(-amount..amount);
            *sample = (i16::from(*sample) + delta).clamp(0, 255) as u8;
        }
    }
}

/// Tabulate `f` over 0..=255, clamping and truncating each result.
fn build_lut(f: impl Fn(f32) -> f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = f(i as f32).clamp(0.0, 255.0) as u8;
    }
    lut
}

fn apply_lut(buffer: &mut RasterBuffer, lut: &[u8; 256]) {
    for px in buffer.pixels_mut().chunks_exact_mut(4) {
        for sample in &mut px[..3] {
            *sample = lut[*sample as usize];
        }
    }
}
