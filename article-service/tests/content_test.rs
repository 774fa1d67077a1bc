//! Integration tests for the section content route.

mod common;

use common::TestApp;
use serde_json::json;

fn content_request_body() -> serde_json::Value {
    json!({
        "subject": "دم کردن قهوه",
        "section": "مقدمه",
        "section_index": 1,
        "length": 300,
        "keywords": ["قهوه"],
        "site_subject": "آشپزی",
        "tone": "رسمی",
        "target_audience": "عمومی",
        "previous_content": "بخش قبلی"
    })
}

#[tokio::test]
async fn generate_content_returns_trimmed_markdown() {
    // Arrange
    let app = TestApp::spawn().await;
    app.generator
        .push_reply("\n\n## مقدمه\n\nمتن بخش اول.\n\n");

    // Act
    let response = app
        .client
        .post(app.url("/api/generate-content"))
        .json(&content_request_body())
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["content"], "## مقدمه\n\nمتن بخش اول.");
}

#[tokio::test]
async fn generate_content_rejects_missing_subject() {
    let app = TestApp::spawn().await;

    let mut body = content_request_body();
    body.as_object_mut().unwrap().remove("subject");

    let response = app
        .client
        .post(app.url("/api/generate-content"))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn generate_content_works_without_optional_fields() {
    let app = TestApp::spawn().await;
    app.generator.push_reply("متن");

    let response = app
        .client
        .post(app.url("/api/generate-content"))
        .json(&json!({
            "subject": "موضوع",
            "section": "بخش",
            "length": 200,
            "keywords": ["کلمه"],
            "site_subject": "سایت"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
}
