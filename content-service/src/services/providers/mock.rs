//! Mock provider implementation for testing.

use super::{ChatMessage, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock text provider returning a canned reply, or failing on demand.
///
/// Every exchange it receives is recorded so tests can inspect the messages.
pub struct MockTextProvider {
    reply: Option<String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockTextProvider {
    /// Provider that always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always fails with an API error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Exchanges received so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, messages: &[ChatMessage]) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        match &self.reply {
            Some(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: messages.iter().map(|m| m.content.len() as u32 / 4).sum(),
                output_tokens: text.len() as u32 / 4,
                finish_reason: Some("stop".to_string()),
            }),
            None => Err(ProviderError::ApiError(
                "Mock provider configured to fail".to_string(),
            )),
        }
    }
}
