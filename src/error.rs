use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Input bytes could not be turned into an RGBA raster.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {color_type:?} at {bit_depth:?}")]
    Unsupported {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error("Raster error: {0}")]
    Raster(#[from] halftone::DitherError),
}

/// A raster could not be serialized as PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("PNG encode error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("PNG optimize error: {0}")]
    Optimize(String),
}

/// Failure anywhere between input bytes and output bytes.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl From<halftone::DitherError> for PipelineError {
    fn from(e: halftone::DitherError) -> Self {
        match e {
            halftone::DitherError::UnknownAlgorithm(name) => PipelineError::UnknownAlgorithm(name),
            other => PipelineError::Decode(DecodeError::Raster(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Pipeline(PipelineError::UnknownAlgorithm(_)) => StatusCode::NOT_FOUND,
            ApiError::Pipeline(PipelineError::Decode(_)) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::InvalidColor(_)) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(PipelineError::Encode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
