use deepfake_core::ReportError;
use deepfake_llm::CompletionError;
use thiserror::Error;

/// Errors surfaced to the hosting runtime by a single agent turn.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The completion service failed on the conversational path.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The analysis report could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),
}
