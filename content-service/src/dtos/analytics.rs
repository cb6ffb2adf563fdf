use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_generated: u64,
    /// Mean rating rendered with two decimals, e.g. "3.50".
    pub average_rating: String,
    #[serde(rename = "last5Feedbacks")]
    pub last5_feedbacks: Vec<FeedbackEntry>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
