//! Text-generation provider abstraction.
//!
//! A trait-based seam over the generative-language backend so handlers can
//! be exercised against a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream API error {status}")]
    Upstream {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Upstream returned no candidate text")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

// Only a reply carrying an upstream status keeps that status; everything
// else (missing key, transport failure, empty candidates) is a generic 500.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => AppError::Upstream { status, body },
            ProviderError::NotConfigured(msg) => AppError::InternalError(anyhow::anyhow!(
                "Missing server-side API key: {}",
                msg
            )),
            ProviderError::EmptyResponse => AppError::InternalError(anyhow::anyhow!(
                "upstream returned no candidate text"
            )),
            ProviderError::NetworkError(msg) => AppError::InternalError(anyhow::anyhow!(msg)),
        }
    }
}

/// Request options for a single generation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
    /// Attach the `google_search` grounding tool to the request.
    pub google_search: bool,
}

/// Trait for text generation providers (e.g. Gemini).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation and return the first candidate's text.
    async fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, ProviderError>;
}
