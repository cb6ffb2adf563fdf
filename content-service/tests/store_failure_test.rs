mod common;

use axum::http::StatusCode;
use common::{onboard_body, StoreOperation, TestApp, TEST_ORG};
use serde_json::json;

#[tokio::test]
async fn onboarding_reports_storage_failure() {
    let app = TestApp::failing_on(&[StoreOperation::InsertOrganization]);

    let (status, body) = app.post_json("/api/onboard", onboard_body(TEST_ORG)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
    assert!(app.store.organizations().await.is_empty());
}

#[tokio::test]
async fn organization_lookup_failure_is_a_storage_error() {
    let app = TestApp::failing_on(&[StoreOperation::FindOrganization]);
    app.onboard(TEST_ORG).await;

    let (status, body) = app
        .post_json(
            "/api/generate",
            json!({ "orgName": TEST_ORG, "prompt": "Write a tagline" }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
    assert!(app.provider.calls().is_empty());
    assert!(app.store.prompts().await.is_empty());
}

#[tokio::test]
async fn storing_generated_content_failure_is_a_generation_error() {
    let app = TestApp::failing_on(&[StoreOperation::InsertPrompt]);
    app.onboard(TEST_ORG).await;

    let (status, body) = app
        .post_json(
            "/api/generate",
            json!({ "orgName": TEST_ORG, "prompt": "Write a tagline" }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate content" }));
    assert_eq!(app.provider.calls().len(), 1);
    assert!(app.store.prompts().await.is_empty());
}

#[tokio::test]
async fn rating_reports_storage_failure() {
    let app = TestApp::failing_on(&[StoreOperation::RatePrompt]);
    app.onboard(TEST_ORG).await;
    app.generate(TEST_ORG, "Write a tagline").await;

    let (status, body) = app
        .post_json(
            "/api/rate",
            json!({
                "orgName": TEST_ORG,
                "prompt": "Write a tagline",
                "rating": 4,
                "feedback": "good"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
    let prompts = app.store.prompts().await;
    assert!(prompts[0].rating.is_none());
    assert!(prompts[0].feedback.is_none());
}

#[tokio::test]
async fn analytics_reports_storage_failure() {
    let app = TestApp::failing_on(&[StoreOperation::FindPrompts]);
    app.onboard(TEST_ORG).await;
    app.generate(TEST_ORG, "Write a tagline").await;

    let (status, body) = app.get(&format!("/api/analytics/{}", TEST_ORG)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
}
