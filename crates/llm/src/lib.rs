pub mod completion;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use completion::CompletionService;
pub use config::CompletionConfig;
pub use error::CompletionError;
pub use http::HttpCompletionService;
pub use mock::{FailingCompletionService, MockCompletionService};
