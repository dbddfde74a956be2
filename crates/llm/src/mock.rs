use std::sync::Arc;

use async_trait::async_trait;
use deepfake_core::Message;
use parking_lot::Mutex;

use crate::completion::CompletionService;
use crate::error::CompletionError;

/// A mock completion service that returns a fixed reply and records requests.
#[derive(Debug, Clone)]
pub struct MockCompletionService {
    reply: String,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockCompletionService {
    /// Create a mock that always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Message lists received so far, in call order.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl CompletionService for MockCompletionService {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        self.requests.lock().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// A mock completion service that always returns an error.
#[derive(Debug, Clone)]
pub struct FailingCompletionService {
    error_message: String,
}

impl FailingCompletionService {
    /// Create a failing service with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

#[async_trait]
impl CompletionService for FailingCompletionService {
    async fn complete(&self, _messages: &[Message]) -> Result<String, CompletionError> {
        Err(CompletionError::Api(self.error_message.clone()))
    }
}
