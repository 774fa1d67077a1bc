//! Integration tests for the Markdown conversion routes.

mod common;

use article_service::services::providers::ProviderError;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn convert_markdown_returns_model_html() {
    // Arrange
    let app = TestApp::spawn().await;
    app.generator.push_reply(
        "\n<span style=\"font-size: 14pt;\"><strong>🔵 عنوان</strong></span>\n",
    );

    // Act
    let response = app
        .client
        .post(app.url("/api/convert-markdown"))
        .json(&json!({ "markdown": "## عنوان" }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["html"],
        "<span style=\"font-size: 14pt;\"><strong>🔵 عنوان</strong></span>"
    );
}

#[tokio::test]
async fn convert_markdown_rejects_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/convert-markdown"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}

// Failures without an upstream status (transport errors, empty candidate
// lists) come back as a generic 500, not a gateway status.
#[tokio::test]
async fn convert_markdown_maps_transport_failure_to_500() {
    let app = TestApp::spawn().await;
    app.generator.push_error(ProviderError::NetworkError(
        "connection refused".to_string(),
    ));

    let response = app
        .client
        .post(app.url("/api/convert-markdown"))
        .json(&json!({ "markdown": "hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn convert_markdown_maps_empty_candidates_to_500() {
    let app = TestApp::spawn().await;
    app.generator.push_error(ProviderError::EmptyResponse);

    let response = app
        .client
        .post(app.url("/api/convert-markdown"))
        .json(&json!({ "markdown": "hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn render_markdown_normalizes_locally_without_upstream_call() {
    let app = TestApp::spawn().await;
    // No scripted reply: the route must not touch the provider.

    let response = app
        .client
        .post(app.url("/api/render-markdown"))
        .json(&json!({ "markdown": "## Title\n\nSome *text*." }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let html = body["html"].as_str().expect("html is a string");
    assert!(html.contains("<span style=\"font-size: 14pt;\"><strong>🔵 Title</strong></span>"));
    assert!(html.contains("<span style=\"font-size: 14pt;\">Some <em>text</em>.</span>"));
    assert!(!html.contains("<h2"));
    assert!(!html.contains("<p>"));
}

#[tokio::test]
async fn render_markdown_rejects_empty_markdown() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/render-markdown"))
        .json(&json!({ "markdown": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}
