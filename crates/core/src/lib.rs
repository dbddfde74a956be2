//! Core types for the deepfake detection agent.
//!
//! Everything here is synchronous and free of I/O: the conversation model,
//! file hash derivation, the deterministic mock analyzer and the reply
//! templates.

pub mod detection;
pub mod error;
pub mod hash;
pub mod message;
pub mod report;

pub use detection::{
    DetectionResult, MODEL_VERSION, NO_MANIPULATION, ProcessingTime, REASONS, analyze, seed,
};
pub use error::ReportError;
pub use hash::{FILE_HASH_MARKER, FileHash, PLACEHOLDER_HASH};
pub use message::{Message, Role};
pub use report::{REPORT_TEMPLATE, ReportFields, WELCOME_MESSAGE, render_report};
