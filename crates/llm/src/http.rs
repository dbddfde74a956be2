use std::time::Duration;

use async_trait::async_trait;
use deepfake_core::Message;
use serde_json::json;
use tracing::{debug, warn};

use crate::completion::CompletionService;
use crate::config::CompletionConfig;
use crate::error::CompletionError;

/// Completion service backed by an OpenAI-compatible chat completions API.
#[derive(Debug)]
pub struct HttpCompletionService {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl HttpCompletionService {
    /// Create a new HTTP completion service with the given configuration.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        if config.endpoint.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "completion endpoint must not be empty".to_owned(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CompletionError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "messages": messages,
        })
    }

    /// Pull the generated text out of a chat completions response.
    fn extract_content(response: &serde_json::Value) -> Result<String, CompletionError> {
        response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                CompletionError::Parse(format!("unexpected response format: {response}"))
            })
    }
}

#[async_trait]
impl CompletionService for HttpCompletionService {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let request_body = self.build_request_body(messages);

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            messages = messages.len(),
            "sending completion request"
        );

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if !self.config.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.config.api_key));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(self.config.timeout_seconds)
            } else {
                CompletionError::Http(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "completion API returned error");
            return Err(CompletionError::Api(format!("HTTP {status}: {body}")));
        }

        let response_json: serde_json::Value = response.json().await.map_err(|e| {
            CompletionError::Parse(format!("failed to parse API response: {e}"))
        })?;

        Self::extract_content(&response_json)
    }
}
