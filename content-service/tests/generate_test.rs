mod common;

use axum::http::StatusCode;
use common::{TestApp, GENERATED_TEXT, TEST_ORG};
use content_service::services::providers::mock::MockTextProvider;
use content_service::services::providers::Role;
use serde_json::json;

#[tokio::test]
async fn generate_returns_and_stores_provider_content() {
    let app = TestApp::new();
    app.onboard(TEST_ORG).await;

    let (status, body) = app
        .post_json(
            "/api/generate",
            json!({ "orgName": TEST_ORG, "prompt": "Write a tagline" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": GENERATED_TEXT }));

    let prompts = app.store.prompts().await;
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].org_name, TEST_ORG);
    assert_eq!(prompts[0].prompt, "Write a tagline");
    assert_eq!(prompts[0].content, GENERATED_TEXT);
    assert!(prompts[0].rating.is_none());
    assert!(prompts[0].feedback.is_none());
}

#[tokio::test]
async fn generate_sends_brand_instruction_then_user_prompt() {
    let app = TestApp::new();
    app.onboard(TEST_ORG).await;
    app.generate(TEST_ORG, "Write a tagline").await;

    let calls = app.provider.calls();
    assert_eq!(calls.len(), 1);
    let messages = &calls[0];
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].content.contains("Confident, warm, never sarcastic"));
    assert!(messages[0].content.contains("Increase trial signups"));
    assert!(messages[0].content.contains("Short paragraphs, active voice"));
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "Write a tagline");
}

#[tokio::test]
async fn generate_for_unknown_organization_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/generate", json!({ "orgName": "nobody", "prompt": "Hi" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
    assert!(app.store.prompts().await.is_empty());
    assert!(app.provider.calls().is_empty());
}

#[tokio::test]
async fn generate_with_missing_fields_is_rejected() {
    let app = TestApp::new();
    app.onboard(TEST_ORG).await;

    for body in [
        json!({ "orgName": TEST_ORG }),
        json!({ "prompt": "Hi" }),
        json!({ "orgName": TEST_ORG, "prompt": "" }),
    ] {
        let (status, _) = app.post_json("/api/generate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    assert!(app.store.prompts().await.is_empty());
}

#[tokio::test]
async fn provider_failure_is_a_generic_server_error() {
    let app = TestApp::with_provider(MockTextProvider::failing());
    app.onboard(TEST_ORG).await;

    let (status, body) = app
        .post_json("/api/generate", json!({ "orgName": TEST_ORG, "prompt": "Hi" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate content");
    assert!(!body.to_string().contains("Mock provider"));
    assert!(app.store.prompts().await.is_empty());
}

#[tokio::test]
async fn identical_requests_each_call_provider_and_store() {
    let app = TestApp::new();
    app.onboard(TEST_ORG).await;

    app.generate(TEST_ORG, "Same prompt").await;
    app.generate(TEST_ORG, "Same prompt").await;

    assert_eq!(app.provider.calls().len(), 2);
    assert_eq!(app.store.prompts().await.len(), 2);
}
