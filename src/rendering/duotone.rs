//! Recolor a dithered raster with two arbitrary colors.

use halftone::RasterBuffer;

use crate::error::PipelineError;
use crate::models::DuotoneConfig;
use crate::rendering::adjust::luma;

/// An RGBA color.
pub type Rgba = [u8; 4];

/// Parse `#rrggbb` (or `rrggbb`) into RGB.
pub fn parse_hex_color(input: &str) -> Result<[u8; 3], PipelineError> {
    let digits = input.trim().trim_start_matches('#');
    let bytes = hex::decode(digits).map_err(|_| PipelineError::InvalidColor(input.to_string()))?;
    match bytes.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(PipelineError::InvalidColor(input.to_string())),
    }
}

/// Resolved foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duotone {
    pub foreground: Rgba,
    pub background: Rgba,
}

impl Duotone {
    pub fn from_config(config: &DuotoneConfig) -> Result<Self, PipelineError> {
        let [fr, fg, fb] = parse_hex_color(&config.foreground)?;
        let [br, bg, bb] = parse_hex_color(&config.background)?;
        Ok(Self {
            foreground: [fr, fg, fb, config.foreground_opacity],
            background: [br, bg, bb, config.background_opacity],
        })
    }

    /// Dark pixels (luma below 128) take the background color, the rest the
    /// foreground color. The source alpha is discarded.
    pub fn apply(&self, buffer: &mut RasterBuffer) {
        for px in buffer.pixels_mut().chunks_exact_mut(4) {
            let color = if luma(px[0], px[1], px[2]) < 128 {
                self.background
            } else {
                self.foreground
            };
            px.copy_from_slice(&color);
        }
    }
}
