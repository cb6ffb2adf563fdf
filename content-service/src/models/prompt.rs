//! Prompt record: one generation attempt and its optional rating.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub org_name: String,
    pub prompt: String,
    /// Generated output returned by the provider.
    pub content: String,
    /// Unset until the record is rated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl PromptRecord {
    /// Create an unrated record for freshly generated content.
    pub fn new(org_name: String, prompt: String, content: String) -> Self {
        Self {
            id: None,
            org_name,
            prompt,
            content,
            rating: None,
            feedback: None,
            created_at: Utc::now(),
        }
    }

    /// Overwrite rating and feedback; previous values are not kept.
    pub fn rate(&mut self, rating: f64, feedback: Option<String>) {
        self.rating = Some(rating);
        self.feedback = feedback;
    }
}
