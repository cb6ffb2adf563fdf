//! Language-model provider abstractions and implementations.
//!
//! Handlers talk to a [`TextProvider`]; the OpenAI chat-completions client is
//! used in production and a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::InvalidResponse(_) => "invalid_response",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::NetworkError(_) => "network_error",
        }
    }
}

/// Chat role of a message sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Result of a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: u32,

    /// Output tokens generated.
    pub output_tokens: u32,

    /// Raw finish reason reported by the provider.
    pub finish_reason: Option<String>,
}

/// Trait for text generation providers (e.g., OpenAI).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name for logs and metrics.
    fn name(&self) -> &str;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    /// Generate a reply to the given exchange using default sampling.
    async fn generate(&self, messages: &[ChatMessage]) -> Result<ProviderResponse, ProviderError>;
}
