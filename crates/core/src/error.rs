use thiserror::Error;

/// Errors that can occur while rendering a reply template.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The template source failed to compile.
    #[error("invalid report template: {0}")]
    Template(String),

    /// Rendering the compiled template failed.
    #[error("failed to render report: {0}")]
    Render(String),
}
