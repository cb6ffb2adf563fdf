//! Organization model holding the brand context used to steer generation.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A tenant onboarded with its brand guide and style preferences.
///
/// `org_name` acts as the natural key but is not unique: onboarding the same
/// name twice stores two records and lookups return whichever the store
/// yields first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub org_name: String,
    pub brand_guide: String,
    pub goals: String,
    /// Collected at onboarding but not part of the generation instruction.
    pub personas: String,
    pub style_preferences: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(
        org_name: String,
        brand_guide: String,
        goals: String,
        personas: String,
        style_preferences: String,
    ) -> Self {
        Self {
            id: None,
            org_name,
            brand_guide,
            goals,
            personas,
            style_preferences,
            created_at: Utc::now(),
        }
    }
}
