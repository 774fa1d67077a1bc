use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::services::prompt;
use crate::services::providers::GenerationOptions;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct UpstreamProbeResponse {
    pub status: String,
    pub text: String,
}

/// Fire one search-grounded generation to verify the API key, the model and
/// any proxy tunnel end to end.
#[tracing::instrument(skip(state))]
pub async fn upstream_probe(
    State(state): State<AppState>,
) -> Result<Json<UpstreamProbeResponse>, AppError> {
    let text = state
        .text_generator
        .generate(
            &prompt::upstream_probe(),
            GenerationOptions {
                google_search: true,
            },
        )
        .await?;

    Ok(Json(UpstreamProbeResponse {
        status: "ok".to_string(),
        text,
    }))
}
