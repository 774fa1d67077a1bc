use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{strip_code_fences, AppJson};
use crate::models::SeoInfo;
use crate::services::prompt;
use crate::services::providers::GenerationOptions;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct OptimizeSeoRequest {
    #[validate(length(min = 1, message = "Missing input text"))]
    pub text: String,
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeSeoResponse {
    pub optimized_text: String,
}

/// Rewrite a text for SEO and readability without changing its structure.
#[tracing::instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn optimize_seo(
    State(state): State<AppState>,
    AppJson(request): AppJson<OptimizeSeoRequest>,
) -> Result<Json<OptimizeSeoResponse>, AppError> {
    request.validate()?;

    let prompt = prompt::optimize_seo(&request.text, &request.keywords);
    let generated = state
        .text_generator
        .generate(&prompt, GenerationOptions::default())
        .await?;

    Ok(Json(OptimizeSeoResponse {
        optimized_text: generated.trim().to_string(),
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateSeoInfoRequest {
    #[validate(length(min = 1, message = "Missing topic"))]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateSeoInfoResponse {
    pub data: SeoInfo,
}

/// Produce SEO metadata (title, meta description, keyword buckets, heading
/// outline) for a topic.
#[tracing::instrument(skip(state, request), fields(topic = %request.topic))]
pub async fn generate_seo_info(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateSeoInfoRequest>,
) -> Result<Json<GenerateSeoInfoResponse>, AppError> {
    request.validate()?;

    let prompt = prompt::seo_info(&request.topic);
    let generated = state
        .text_generator
        .generate(&prompt, GenerationOptions::default())
        .await?;

    let raw = strip_code_fences(&generated);
    let info: SeoInfo = serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "SEO info JSON from model did not parse");
        AppError::MalformedModelOutput {
            raw: raw.to_string(),
        }
    })?;

    Ok(Json(GenerateSeoInfoResponse { data: info }))
}
