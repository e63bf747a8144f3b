use std::sync::Arc;

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::pipeline::{dither_image_with, DitherOptions};

/// Async front for the dither pipeline, shared by HTTP handlers.
pub struct DitherService {
    config: Arc<AppConfig>,
}

impl DitherService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Options derived from the loaded configuration.
    pub fn default_options(&self) -> DitherOptions {
        DitherOptions::from_config(&self.config)
    }

    /// Dither PNG bytes.
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// decoding, dithering and encoding.
    pub async fn dither(
        &self,
        input: Vec<u8>,
        algorithm: String,
        options: DitherOptions,
    ) -> Result<Vec<u8>, ApiError> {
        tokio::task::spawn_blocking(move || dither_image_with(&input, &algorithm, &options))
            .await
            .map_err(|e| ApiError::Internal(format!("Dither task failed: {e}")))?
            .map_err(ApiError::from)
    }
}
