//! Test helpers for article-service integration tests.

#![allow(dead_code)]

use article_service::config::{ArticleConfig, GeminiSettings, SecurityConfig};
use article_service::services::providers::mock::MockTextGenerator;
use article_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    /// Handle onto the scripted provider behind the running app.
    pub generator: Arc<MockTextGenerator>,
}

impl TestApp {
    /// Spawn the app on a random port with a scripted mock provider.
    pub async fn spawn() -> Self {
        let config = ArticleConfig {
            common: CoreConfig { port: 0 },
            service_name: "article-service-test".to_string(),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
            gemini: GeminiSettings {
                api_key: "test-key".to_string(),
                model: "gemini-test".to_string(),
                timeout_seconds: 5,
                proxy_url: None,
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        };

        let generator = Arc::new(MockTextGenerator::new());
        let app = Application::build_with_generator(config, generator.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            generator,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
