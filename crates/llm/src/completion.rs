use async_trait::async_trait;
use deepfake_core::Message;

use crate::error::CompletionError;

/// Generates a reply for an ordered list of role-tagged messages.
#[async_trait]
pub trait CompletionService: Send + Sync + std::fmt::Debug {
    /// Return the generated text for `messages`, oldest first.
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}
