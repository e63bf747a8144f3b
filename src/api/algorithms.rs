use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// A registered dithering algorithm
#[derive(Debug, Serialize, ToSchema)]
pub struct AlgorithmInfo {
    /// Canonical name, usable in `/api/dither/{algorithm}`
    pub name: String,
    /// Engine family: error-diffusion, ordered or luminance
    pub family: String,
    /// Alternative names accepted by lookup
    pub aliases: Vec<String>,
}

/// Snapshot of the algorithm registry.
pub fn algorithm_list() -> Vec<AlgorithmInfo> {
    halftone::registry::entries()
        .iter()
        .map(|entry| AlgorithmInfo {
            name: entry.name().to_string(),
            family: entry.algorithm.family().to_string(),
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
        })
        .collect()
}

/// List available algorithms
#[utoipa::path(
    get,
    path = "/api/algorithms",
    responses(
        (status = 200, description = "Registered algorithms", body = Vec<AlgorithmInfo>),
    ),
    tag = "Dither"
)]
pub async fn handle_algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(algorithm_list())
}
