pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::startup::AppState;
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};

/// Build the application router with all routes and middleware layers.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/upstream-probe", get(handlers::probe::upstream_probe))
        .route(
            "/api/generate-outline",
            post(handlers::outline::generate_outline),
        )
        .route(
            "/api/generate-content",
            post(handlers::content::generate_content),
        )
        .route(
            "/api/convert-markdown",
            post(handlers::convert::convert_markdown),
        )
        .route(
            "/api/render-markdown",
            post(handlers::convert::render_markdown),
        )
        .route("/api/optimize-seo", post(handlers::seo::optimize_seo))
        .route(
            "/api/generate-seo-info",
            post(handlers::seo::generate_seo_info),
        )
        .with_state(state)
        // Tracing layer with request-id in the span
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE];

    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}

/// Service liveness check. Stateless service: reports configuration only,
/// no outbound call (use `/api/upstream-probe` to exercise the API key).
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.gemini.model,
        "api_key_configured": !state.config.gemini.api_key.is_empty(),
    }))
}
