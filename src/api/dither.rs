use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::{DitherOptions, DitherService};

/// Per-request overrides for the configured tone adjustments
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DitherQuery {
    /// Contrast factor around the mean luma
    pub contrast: Option<f32>,
    /// Gamma applied before dithering
    pub midtones: Option<f32>,
    /// Gain applied after the gamma curve
    pub highlights: Option<f32>,
    /// Gaussian blur sigma
    pub blur: Option<f32>,
    /// Percent of the original size to dither at (1-100)
    pub scale: Option<u32>,
    /// Pixelation block size
    pub pixelation: Option<u32>,
    /// Noise amplitude
    pub noise: Option<u8>,
    /// Noise seed
    pub seed: Option<u64>,
    /// Convert to grayscale before dithering
    pub grayscale: Option<bool>,
}

impl DitherQuery {
    /// Overlay the query values onto `options`.
    pub fn apply_to(&self, options: &mut DitherOptions) -> Result<(), ApiError> {
        let adjust = &mut options.adjust;
        if let Some(v) = self.contrast {
            adjust.contrast = v;
        }
        if let Some(v) = self.midtones {
            if v <= 0.0 {
                return Err(ApiError::BadRequest("midtones must be positive".to_string()));
            }
            adjust.midtones = v;
        }
        if let Some(v) = self.highlights {
            adjust.highlights = v;
        }
        if let Some(v) = self.blur {
            if v < 0.0 {
                return Err(ApiError::BadRequest("blur must not be negative".to_string()));
            }
            adjust.blur = v;
        }
        if let Some(v) = self.scale {
            if !(1..=100).contains(&v) {
                return Err(ApiError::BadRequest("scale must be between 1 and 100".to_string()));
            }
            adjust.scale = v;
        }
        if let Some(v) = self.pixelation {
            if v == 0 {
                return Err(ApiError::BadRequest("pixelation must be at least 1".to_string()));
            }
            adjust.pixelation = v;
        }
        if let Some(v) = self.noise {
            adjust.noise = v;
        }
        if self.seed.is_some() {
            adjust.seed = self.seed;
        }
        if let Some(v) = self.grayscale {
            adjust.grayscale = v;
        }
        Ok(())
    }
}

/// JSON error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Dither a PNG image
///
/// The request body is a PNG of any color type. The response is an RGBA PNG
/// of the same dimensions.
#[utoipa::path(
    post,
    path = "/api/dither/{algorithm}",
    request_body(content = Vec<u8>, description = "PNG image", content_type = "image/png"),
    responses(
        (status = 200, description = "Dithered PNG image", content_type = "image/png"),
        (status = 400, description = "Malformed PNG or invalid parameter", body = ErrorResponse),
        (status = 404, description = "Unknown algorithm", body = ErrorResponse),
        (status = 500, description = "Encoding error", body = ErrorResponse),
    ),
    params(
        ("algorithm" = String, Path, description = "Algorithm name or alias (see /api/algorithms)"),
        DitherQuery,
    ),
    tag = "Dither"
)]
pub async fn handle_dither(
    State(service): State<Arc<DitherService>>,
    Path(algorithm): Path<String>,
    Query(query): Query<DitherQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut options = service.default_options();
    query.apply_to(&mut options)?;

    tracing::info!(
        algorithm = %algorithm,
        size_bytes = body.len(),
        "Dither request received"
    );

    let png_bytes = service.dither(body.to_vec(), algorithm, options).await?;

    tracing::info!(size_bytes = png_bytes.len(), "Image dithered successfully");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_LENGTH, &png_bytes.len().to_string()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
