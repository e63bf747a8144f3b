//! PNG fixtures built in memory.

use halftone::RasterBuffer;

/// Encode raw sample data as a PNG of the given layout.
pub fn png_bytes(
    width: u32,
    height: u32,
    color: png::ColorType,
    depth: png::BitDepth,
    data: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

/// Indexed PNG with a palette and optional per-entry alpha.
pub fn indexed_png(width: u32, height: u32, plte: &[u8], trns: &[u8], indices: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(plte.to_vec());
        if !trns.is_empty() {
            encoder.set_trns(trns.to_vec());
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(indices).unwrap();
    }
    out
}

/// Opaque RGBA gradient: red ramps along x, green along y.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / (width - 1).max(1)) as u8);
            data.push((y * 255 / (height - 1).max(1)) as u8);
            data.push(128);
            data.push(255);
        }
    }
    png_bytes(width, height, png::ColorType::Rgba, png::BitDepth::Eight, &data)
}

/// Uniform opaque gray RGBA PNG.
pub fn gray_png(width: u32, height: u32, value: u8) -> Vec<u8> {
    let data = RasterBuffer::filled(width, height, [value, value, value, 255]).into_pixels();
    png_bytes(width, height, png::ColorType::Rgba, png::BitDepth::Eight, &data)
}

/// Decode a PNG response body back into a raster.
pub fn decode(bytes: &[u8]) -> RasterBuffer {
    ditherme::rendering::decode(bytes).expect("Response is not a decodable PNG")
}
