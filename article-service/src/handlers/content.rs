use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppJson;
use crate::services::prompt;
use crate::services::providers::GenerationOptions;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateContentRequest {
    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Section cannot be empty"))]
    pub section: String,
    /// 1-based position of the section within the article.
    pub section_index: Option<u32>,
    #[validate(range(min = 1, message = "Length must be positive"))]
    pub length: u32,
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
    #[validate(length(min = 1, message = "Site subject cannot be empty"))]
    pub site_subject: String,
    pub tone: Option<String>,
    pub target_audience: Option<String>,
    pub notes: Option<String>,
    pub previous_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    /// Section body as Markdown, trimmed.
    pub content: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(subject = %request.subject, section = %request.section)
)]
pub async fn generate_content(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    request.validate()?;

    let prompt = prompt::section_content(
        &request.subject,
        &request.section,
        request.section_index.unwrap_or(1),
        request.length,
        &request.keywords,
        &request.site_subject,
        request.tone.as_deref(),
        request.target_audience.as_deref(),
        request.notes.as_deref(),
        request.previous_content.as_deref(),
    );

    let generated = state
        .text_generator
        .generate(&prompt, GenerationOptions::default())
        .await?;

    Ok(Json(GenerateContentResponse {
        content: generated.trim().to_string(),
    }))
}
