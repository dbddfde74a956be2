use serde::Deserialize;

/// Configuration for the HTTP completion service.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// OpenAI-compatible API endpoint (e.g., `https://api.openai.com/v1/chat/completions`).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model to use (e.g., `gpt-4o-mini`).
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for authentication.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Temperature for sampling.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens in the response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl CompletionConfig {
    /// Create a new config with the given endpoint, model, and API key.
    ///
    /// Uses defaults of a 30s timeout, temperature 0.7 and at most 512 tokens.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout_seconds: default_timeout_seconds(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the temperature for sampling.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens in the response.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self::new(default_endpoint(), default_model(), String::new())
    }
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_owned()
}

fn default_model() -> String {
    "gpt-4o-mini".to_owned()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    512
}
