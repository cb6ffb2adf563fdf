//! Data store abstraction for organizations and prompt records.
//!
//! Handlers only see [`ContentStore`]; the service runs on MongoDB
//! ([`crate::services::MongoContentStore`]) and tests use
//! [`InMemoryContentStore`].

use crate::models::{Organization, PromptRecord};
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Verify the store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;

    async fn insert_organization(&self, organization: &Organization) -> Result<(), AppError>;

    /// First organization with this name in store order, if any.
    async fn find_organization(&self, org_name: &str) -> Result<Option<Organization>, AppError>;

    async fn insert_prompt(&self, record: &PromptRecord) -> Result<(), AppError>;

    /// Set rating and feedback on the first record matching `(org_name, prompt)`.
    ///
    /// Returns `false` when nothing matched.
    async fn rate_prompt(
        &self,
        org_name: &str,
        prompt: &str,
        rating: f64,
        feedback: Option<&str>,
    ) -> Result<bool, AppError>;

    /// All prompt records for an organization in natural store order.
    async fn find_prompts(&self, org_name: &str) -> Result<Vec<PromptRecord>, AppError>;
}

/// Process-local store. Insertion order is the natural retrieval order.
#[derive(Default)]
pub struct InMemoryContentStore {
    organizations: RwLock<Vec<Organization>>,
    prompts: RwLock<Vec<PromptRecord>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored organization.
    pub async fn organizations(&self) -> Vec<Organization> {
        self.organizations.read().await.clone()
    }

    /// Snapshot of every stored prompt record.
    pub async fn prompts(&self) -> Vec<PromptRecord> {
        self.prompts.read().await.clone()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_organization(&self, organization: &Organization) -> Result<(), AppError> {
        self.organizations.write().await.push(organization.clone());
        Ok(())
    }

    async fn find_organization(&self, org_name: &str) -> Result<Option<Organization>, AppError> {
        Ok(self
            .organizations
            .read()
            .await
            .iter()
            .find(|o| o.org_name == org_name)
            .cloned())
    }

    async fn insert_prompt(&self, record: &PromptRecord) -> Result<(), AppError> {
        self.prompts.write().await.push(record.clone());
        Ok(())
    }

    async fn rate_prompt(
        &self,
        org_name: &str,
        prompt: &str,
        rating: f64,
        feedback: Option<&str>,
    ) -> Result<bool, AppError> {
        let mut prompts = self.prompts.write().await;
        match prompts
            .iter_mut()
            .find(|p| p.org_name == org_name && p.prompt == prompt)
        {
            Some(record) => {
                record.rate(rating, feedback.map(str::to_string));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_prompts(&self, org_name: &str) -> Result<Vec<PromptRecord>, AppError> {
        Ok(self
            .prompts
            .read()
            .await
            .iter()
            .filter(|p| p.org_name == org_name)
            .cloned()
            .collect())
    }
}
