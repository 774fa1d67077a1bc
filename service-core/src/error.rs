use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Upstream request failed with status {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Failed to parse JSON embedded in generated text")]
    MalformedModelOutput { raw: String },

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Missing or invalid request fields are a client error.
            AppError::ValidationError(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Missing required fields",
                    "details": err.to_string(),
                }),
            ),
            AppError::BadRequest(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": err.to_string() }),
            ),
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "message": err.to_string(),
                }),
            ),
            // Surface the upstream status and body verbatim so the caller can
            // see what the generative API rejected.
            AppError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({
                    "error": "Request failed",
                    "status": status,
                    "data": body,
                }),
            ),
            // Attach the raw generated text for diagnosis.
            AppError::MalformedModelOutput { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to parse JSON response",
                    "raw": raw,
                }),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Configuration error",
                    "details": err.to_string(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
