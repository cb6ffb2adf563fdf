use serde::{Deserialize, Serialize};
use validator::Validate;

// Fields are optional so that a missing value is reported as a validation
// error (400) rather than a body rejection.

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    #[validate(
        required(message = "orgName is required"),
        length(min = 1, message = "orgName cannot be empty")
    )]
    pub org_name: Option<String>,
    #[validate(
        required(message = "brandGuide is required"),
        length(min = 1, message = "brandGuide cannot be empty")
    )]
    pub brand_guide: Option<String>,
    #[validate(
        required(message = "goals is required"),
        length(min = 1, message = "goals cannot be empty")
    )]
    pub goals: Option<String>,
    #[validate(
        required(message = "personas is required"),
        length(min = 1, message = "personas cannot be empty")
    )]
    pub personas: Option<String>,
    #[validate(
        required(message = "stylePreferences is required"),
        length(min = 1, message = "stylePreferences cannot be empty")
    )]
    pub style_preferences: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[validate(
        required(message = "orgName is required"),
        length(min = 1, message = "orgName cannot be empty")
    )]
    pub org_name: Option<String>,
    #[validate(
        required(message = "prompt is required"),
        length(min = 1, message = "prompt cannot be empty")
    )]
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    #[validate(
        required(message = "orgName is required"),
        length(min = 1, message = "orgName cannot be empty")
    )]
    pub org_name: Option<String>,
    #[validate(
        required(message = "prompt is required"),
        length(min = 1, message = "prompt cannot be empty")
    )]
    pub prompt: Option<String>,
    /// Any JSON value; the handler rejects anything that is not a number.
    pub rating: Option<serde_json::Value>,
    /// Free text; non-string values are kept as their JSON text.
    pub feedback: Option<serde_json::Value>,
}

impl RateRequest {
    /// The rating when it is a JSON number.
    pub fn numeric_rating(&self) -> Option<f64> {
        self.rating.as_ref().and_then(serde_json::Value::as_f64)
    }

    /// Feedback as stored: absent or null means none.
    pub fn feedback_text(&self) -> Option<String> {
        match self.feedback.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}
