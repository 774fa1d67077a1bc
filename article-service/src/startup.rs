//! Application startup and lifecycle management.

use crate::build_router;
use crate::config::ArticleConfig;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextGenerator;
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state. The service holds nothing mutable: every
/// request is independent.
#[derive(Clone)]
pub struct AppState {
    pub config: ArticleConfig,
    pub text_generator: Arc<dyn TextGenerator>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: ArticleConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            timeout_seconds: config.gemini.timeout_seconds,
            proxy_url: config.gemini.proxy_url.clone(),
        };
        let text_generator: Arc<dyn TextGenerator> = Arc::new(
            GeminiTextProvider::new(gemini_config)
                .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?,
        );

        tracing::info!(
            model = %config.gemini.model,
            proxy = config.gemini.proxy_url.is_some(),
            "Initialized Gemini text provider"
        );

        Self::build_with_generator(config, text_generator).await
    }

    /// Build the application with an injected generator (used by tests).
    pub async fn build_with_generator(
        config: ArticleConfig,
        text_generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_generator,
        };

        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Article service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
