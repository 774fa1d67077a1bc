use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{strip_code_fences, AppJson};
use crate::models::Outline;
use crate::services::prompt;
use crate::services::providers::GenerationOptions;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateOutlineRequest {
    #[validate(length(min = 1, message = "Topic cannot be empty"))]
    pub topic: String,
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
    #[validate(length(min = 1, message = "Target audience cannot be empty"))]
    pub target_audience: String,
    #[validate(range(min = 1, message = "Desired length must be positive"))]
    pub desired_length: u32,
    #[validate(length(min = 1, message = "Site subject cannot be empty"))]
    pub site_subject: String,
    pub site_posts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutlineResponse {
    pub data: Outline,
}

#[tracing::instrument(skip(state, request), fields(topic = %request.topic))]
pub async fn generate_outline(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateOutlineRequest>,
) -> Result<Json<GenerateOutlineResponse>, AppError> {
    request.validate()?;

    let prompt = prompt::outline(
        &request.topic,
        &request.keywords,
        &request.target_audience,
        request.desired_length,
        &request.site_subject,
        &request.site_posts,
    );

    let generated = state
        .text_generator
        .generate(&prompt, GenerationOptions::default())
        .await?;

    let raw = strip_code_fences(&generated);
    let outline: Outline = serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "Outline JSON from model did not parse");
        AppError::MalformedModelOutput {
            raw: raw.to_string(),
        }
    })?;

    let outline = outline.finalize();
    tracing::info!(
        sections = outline.sections.len(),
        internal_links = outline.internal_links.len(),
        "Outline generated"
    );

    Ok(Json(GenerateOutlineResponse { data: outline }))
}
