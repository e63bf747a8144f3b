use halftone::DitherAlgorithm;
use image::imageops::FilterType;

use crate::error::PipelineError;
use crate::models::{AdjustConfig, AppConfig, DuotoneConfig};
use crate::rendering::{adjust, codec, resample, Duotone};

/// Everything around the core dither step that a caller can tune.
///
/// The default is the bare pipeline: decode, dither, encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DitherOptions {
    pub adjust: AdjustConfig,
    pub duotone: Option<DuotoneConfig>,
    pub optimize: bool,
}

impl DitherOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            adjust: config.adjust.clone(),
            duotone: config.duotone.clone(),
            optimize: config.optimize,
        }
    }
}

/// Decode `input`, dither it with `algorithm` and encode the result.
///
/// Output has the same width and height as the input and is always RGBA.
pub fn dither_image(input: &[u8], algorithm: &str) -> Result<Vec<u8>, PipelineError> {
    dither_image_with(input, algorithm, &DitherOptions::default())
}

/// [`dither_image`] with tone adjustments, duotone and optimization.
///
/// The algorithm name and duotone colors are validated before the input
/// is decoded.
pub fn dither_image_with(
    input: &[u8],
    algorithm: &str,
    options: &DitherOptions,
) -> Result<Vec<u8>, PipelineError> {
    let algorithm = halftone::resolve(algorithm)?;
    let duotone = options
        .duotone
        .as_ref()
        .map(Duotone::from_config)
        .transpose()?;

    DitherPipeline {
        algorithm,
        adjust: &options.adjust,
        duotone,
        optimize: options.optimize,
    }
    .run(input)
}

/// A fully validated pipeline ready to process bytes.
struct DitherPipeline<'a> {
    algorithm: DitherAlgorithm,
    adjust: &'a AdjustConfig,
    duotone: Option<Duotone>,
    optimize: bool,
}

impl DitherPipeline<'_> {
    fn run(&self, input: &[u8]) -> Result<Vec<u8>, PipelineError> {
        let decoded = codec::decode(input)?;
        let (width, height) = decoded.dimensions();

        let mut buffer = resample::downscale(decoded, self.adjust.scale)?;
        adjust::apply(&mut buffer, self.adjust)?;
        self.algorithm.apply(&mut buffer);
        if let Some(duotone) = &self.duotone {
            duotone.apply(&mut buffer);
        }
        let buffer = resample::resize(buffer, width, height, FilterType::Nearest)?;

        let png_bytes = codec::encode(&buffer)?;
        let png_bytes = if self.optimize {
            codec::optimize(&png_bytes)?
        } else {
            png_bytes
        };

        tracing::debug!(
            width,
            height,
            algorithm = self.algorithm.name(),
            input_bytes = input.len(),
            output_bytes = png_bytes.len(),
            "Dithered image"
        );

        Ok(png_bytes)
    }
}
