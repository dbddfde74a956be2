use thiserror::Error;

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request timed out.
    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse the completion response.
    #[error("failed to parse completion response: {0}")]
    Parse(String),

    /// Completion API returned an error response.
    #[error("completion API error: {0}")]
    Api(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}
