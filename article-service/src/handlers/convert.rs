use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppJson;
use crate::services::providers::GenerationOptions;
use crate::services::{markdown, prompt};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct ConvertMarkdownRequest {
    #[validate(length(min = 1, message = "Missing markdown content"))]
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertMarkdownResponse {
    pub html: String,
}

/// Convert Markdown via the generative model's formatter prompt.
#[tracing::instrument(skip(state, request), fields(markdown_len = request.markdown.len()))]
pub async fn convert_markdown(
    State(state): State<AppState>,
    AppJson(request): AppJson<ConvertMarkdownRequest>,
) -> Result<Json<ConvertMarkdownResponse>, AppError> {
    request.validate()?;

    let prompt = prompt::convert_markdown(&request.markdown);
    let generated = state
        .text_generator
        .generate(&prompt, GenerationOptions::default())
        .await?;

    Ok(Json(ConvertMarkdownResponse {
        html: generated.trim().to_string(),
    }))
}

/// Convert Markdown locally: render it, then rewrite the HTML into the
/// constrained tag vocabulary. No outbound call; this is the deterministic
/// counterpart the client falls back to when the model path is unavailable.
#[tracing::instrument(skip(request), fields(markdown_len = request.markdown.len()))]
pub async fn render_markdown(
    AppJson(request): AppJson<ConvertMarkdownRequest>,
) -> Result<Json<ConvertMarkdownResponse>, AppError> {
    request.validate()?;

    let html = markdown::render_markdown(&request.markdown);
    let html = markdown::normalize_html(&html);

    Ok(Json(ConvertMarkdownResponse {
        html: html.trim().to_string(),
    }))
}
