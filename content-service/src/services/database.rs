//! MongoDB-backed content store.
//!
//! Organizations and prompt records live in the `organizations` and `prompts`
//! collections. Neither natural key is unique, so lookups take the first
//! document the server returns.

use crate::models::{Organization, PromptRecord};
use crate::services::store::ContentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    options::{ConnectionString, IndexOptions},
    Client as MongoClient, Collection, IndexModel,
};
use service_core::error::AppError;
use tokio::sync::OnceCell;

/// Content store over a lazily created MongoDB client.
///
/// Creating the client can fail for reasons other than a bad URI (a
/// `mongodb+srv://` URI needs a DNS lookup first). Until a client exists,
/// every call retries the creation and fails with a database error.
pub struct MongoContentStore {
    uri: String,
    database: String,
    client: OnceCell<MongoClient>,
}

impl MongoContentStore {
    /// Validate the connection string and try to create the client.
    ///
    /// Only an unparseable URI is an error here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        ConnectionString::parse(uri).map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::ConfigError(anyhow::anyhow!("Invalid MONGODB_URI: {}", e))
        })?;

        tracing::info!(database = %database, "Creating MongoDB client");
        let store = Self {
            uri: uri.to_string(),
            database: database.to_string(),
            client: OnceCell::new(),
        };

        if let Err(e) = store.client().await {
            tracing::warn!("MongoDB client not available yet, will retry on use: {}", e);
        }

        Ok(store)
    }

    /// The driver client, created on first successful use.
    pub async fn client(&self) -> Result<&MongoClient, AppError> {
        self.client
            .get_or_try_init(|| async {
                MongoClient::with_uri_str(&self.uri).await.map_err(|e| {
                    tracing::error!("Failed to create MongoDB client: {}", e);
                    AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
                })
            })
            .await
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for content-service");

        let org_name_index = IndexModel::builder()
            .keys(doc! { "orgName": 1 })
            .options(
                IndexOptions::builder()
                    .name("org_name_idx".to_string())
                    .build(),
            )
            .build();

        self.organizations()
            .await?
            .create_index(org_name_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create orgName index on organizations: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        // Rating lookup
        let org_prompt_index = IndexModel::builder()
            .keys(doc! { "orgName": 1, "prompt": 1 })
            .options(
                IndexOptions::builder()
                    .name("org_prompt_idx".to_string())
                    .build(),
            )
            .build();

        self.prompts()
            .await?
            .create_index(org_prompt_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create (orgName, prompt) index on prompts: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub async fn organizations(&self) -> Result<Collection<Organization>, AppError> {
        Ok(self.client().await?.database(&self.database).collection("organizations"))
    }

    pub async fn prompts(&self) -> Result<Collection<PromptRecord>, AppError> {
        Ok(self.client().await?.database(&self.database).collection("prompts"))
    }
}

#[async_trait]
impl ContentStore for MongoContentStore {
    async fn health_check(&self) -> Result<(), AppError> {
        self.client()
            .await?
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn insert_organization(&self, organization: &Organization) -> Result<(), AppError> {
        self.organizations()
            .await?
            .insert_one(organization, None)
            .await
            .map_err(|e| {
                tracing::error!(org_name = %organization.org_name, "Failed to insert organization: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn find_organization(&self, org_name: &str) -> Result<Option<Organization>, AppError> {
        self.organizations()
            .await?
            .find_one(doc! { "orgName": org_name }, None)
            .await
            .map_err(|e| {
                tracing::error!(org_name = %org_name, "Failed to find organization: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })
    }

    async fn insert_prompt(&self, record: &PromptRecord) -> Result<(), AppError> {
        self.prompts().await?.insert_one(record, None).await.map_err(|e| {
            tracing::error!(org_name = %record.org_name, "Failed to insert prompt record: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        Ok(())
    }

    async fn rate_prompt(
        &self,
        org_name: &str,
        prompt: &str,
        rating: f64,
        feedback: Option<&str>,
    ) -> Result<bool, AppError> {
        let feedback = feedback.map_or(Bson::Null, |f| Bson::String(f.to_string()));

        let result = self
            .prompts()
            .await?
            .update_one(
                doc! { "orgName": org_name, "prompt": prompt },
                doc! { "$set": { "rating": rating, "feedback": feedback } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!(org_name = %org_name, "Failed to rate prompt record: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(result.matched_count > 0)
    }

    async fn find_prompts(&self, org_name: &str) -> Result<Vec<PromptRecord>, AppError> {
        let cursor = self
            .prompts()
            .await?
            .find(doc! { "orgName": org_name }, None)
            .await
            .map_err(|e| {
                tracing::error!(org_name = %org_name, "Failed to query prompt records: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(org_name = %org_name, "Failed to collect prompt records: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }
}
