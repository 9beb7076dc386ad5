//! Mock provider implementation for testing.

use super::{ChatProvider, ChatReply, FinishReason, ProviderError};
use async_trait::async_trait;

/// Mock chat provider for testing.
pub struct MockChatProvider {
    reply: String,
    fail: bool,
}

impl MockChatProvider {
    /// Provider that answers every request with the given reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
        }
    }

    /// Provider that fails every request with an API error.
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_message: &str,
    ) -> Result<ChatReply, ProviderError> {
        if self.fail {
            return Err(ProviderError::ApiError(
                "Mock provider failure".to_string(),
            ));
        }

        Ok(ChatReply {
            text: self.reply.clone(),
            input_tokens: user_message.len() as i32 / 4,
            output_tokens: self.reply.len() as i32 / 4,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.fail {
            Err(ProviderError::ApiError(
                "Mock provider failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
