use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default outbound call timeout.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ArticleConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub gemini: GeminiSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
    /// HTTP(S) proxy to tunnel outbound calls through.
    pub proxy_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl ArticleConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        // Prefer GEMINI_API_KEY, fall back to GOOGLE_API_KEY. In dev the
        // service starts without a key; Gemini-backed routes fail until set.
        let api_key = match env::var("GEMINI_API_KEY").or_else(|_| env::var("GOOGLE_API_KEY")) {
            Ok(key) => key,
            Err(_) if is_prod => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "GEMINI_API_KEY or GOOGLE_API_KEY is required in production but not set"
                )));
            }
            Err(_) => {
                tracing::warn!(
                    "No GEMINI_API_KEY or GOOGLE_API_KEY in environment; \
                     generation endpoints will fail until one is set"
                );
                String::new()
            }
        };

        Ok(ArticleConfig {
            common,
            service_name: get_env("SERVICE_NAME", Some("article-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok(),
            gemini: GeminiSettings {
                api_key,
                model: get_env("GEMINI_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                timeout_seconds: get_env(
                    "GEMINI_TIMEOUT_SECONDS",
                    Some(&DEFAULT_TIMEOUT_SECONDS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                proxy_url: env::var("HTTPS_PROXY")
                    .or_else(|_| env::var("HTTP_PROXY"))
                    .ok()
                    .filter(|url| !url.is_empty()),
            },
            security: SecurityConfig {
                allowed_origins: get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
