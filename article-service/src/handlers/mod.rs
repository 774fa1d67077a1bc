//! HTTP handlers, one module per wizard operation.

pub mod content;
pub mod convert;
pub mod outline;
pub mod probe;
pub mod seo;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// `Json` extractor that reports missing/invalid fields as 400 instead of
/// axum's default 422.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(anyhow::anyhow!("{}", rejection.body_text()))
            })?;
        Ok(AppJson(value))
    }
}

/// Strip the Markdown code fence the model tends to wrap JSON output in.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json\n")
        .or_else(|| trimmed.strip_prefix("```\n"))
        .unwrap_or(trimmed);
    body.strip_suffix("\n```").unwrap_or(body).trim()
}
