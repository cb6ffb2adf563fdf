#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use content_service::models::{Organization, PromptRecord};
use content_service::services::providers::mock::MockTextProvider;
use content_service::services::{ContentStore, InMemoryContentStore};
use content_service::startup::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_ORG: &str = "acme";
pub const GENERATED_TEXT: &str = "Bold ideas for bold builders.";

/// Router wired to an in-memory store and a mock provider.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryContentStore>,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_provider(MockTextProvider::replying(GENERATED_TEXT))
    }

    pub fn with_provider(provider: MockTextProvider) -> Self {
        Self::assemble(provider, &[])
    }

    /// App whose store fails the listed operations and serves the rest from memory.
    pub fn failing_on(operations: &[StoreOperation]) -> Self {
        Self::assemble(MockTextProvider::replying(GENERATED_TEXT), operations)
    }

    fn assemble(provider: MockTextProvider, failing: &[StoreOperation]) -> Self {
        let store = Arc::new(InMemoryContentStore::new());
        let provider = Arc::new(provider);
        let state = AppState {
            store: Arc::new(FailingContentStore {
                inner: store.clone(),
                failing: failing.to_vec(),
            }),
            text_provider: provider.clone(),
        };

        Self {
            router: router(state),
            store,
            provider,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, body)
    }

    pub async fn onboard(&self, org_name: &str) {
        let (status, _) = self.post_json("/api/onboard", onboard_body(org_name)).await;
        assert_eq!(status, StatusCode::OK);
    }

    pub async fn generate(&self, org_name: &str, prompt: &str) {
        let (status, _) = self
            .post_json("/api/generate", json!({ "orgName": org_name, "prompt": prompt }))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    pub async fn rate(&self, org_name: &str, prompt: &str, rating: f64, feedback: &str) -> StatusCode {
        let (status, _) = self
            .post_json(
                "/api/rate",
                json!({
                    "orgName": org_name,
                    "prompt": prompt,
                    "rating": rating,
                    "feedback": feedback
                }),
            )
            .await;
        status
    }
}

pub fn onboard_body(org_name: &str) -> Value {
    json!({
        "orgName": org_name,
        "brandGuide": "Confident, warm, never sarcastic",
        "goals": "Increase trial signups",
        "personas": "Startup CTOs",
        "stylePreferences": "Short paragraphs, active voice"
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    InsertOrganization,
    FindOrganization,
    InsertPrompt,
    RatePrompt,
    FindPrompts,
}

/// Delegates to an in-memory store except for operations switched to fail.
pub struct FailingContentStore {
    inner: Arc<InMemoryContentStore>,
    failing: Vec<StoreOperation>,
}

impl FailingContentStore {
    fn check(&self, operation: StoreOperation) -> Result<(), AppError> {
        if self.failing.contains(&operation) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "{:?} failed: connection reset",
                operation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn health_check(&self) -> Result<(), AppError> {
        self.inner.health_check().await
    }

    async fn insert_organization(&self, organization: &Organization) -> Result<(), AppError> {
        self.check(StoreOperation::InsertOrganization)?;
        self.inner.insert_organization(organization).await
    }

    async fn find_organization(&self, org_name: &str) -> Result<Option<Organization>, AppError> {
        self.check(StoreOperation::FindOrganization)?;
        self.inner.find_organization(org_name).await
    }

    async fn insert_prompt(&self, record: &PromptRecord) -> Result<(), AppError> {
        self.check(StoreOperation::InsertPrompt)?;
        self.inner.insert_prompt(record).await
    }

    async fn rate_prompt(
        &self,
        org_name: &str,
        prompt: &str,
        rating: f64,
        feedback: Option<&str>,
    ) -> Result<bool, AppError> {
        self.check(StoreOperation::RatePrompt)?;
        self.inner.rate_prompt(org_name, prompt, rating, feedback).await
    }

    async fn find_prompts(&self, org_name: &str) -> Result<Vec<PromptRecord>, AppError> {
        self.check(StoreOperation::FindPrompts)?;
        self.inner.find_prompts(org_name).await
    }
}
