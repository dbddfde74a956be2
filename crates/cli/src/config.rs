use std::io;
use std::path::Path;

use deepfake_llm::CompletionConfig;
use serde::Deserialize;
use tracing::info;

/// Contents of `deepfake-agent.toml`.
///
/// ```toml
/// [completion]
/// endpoint = "http://localhost:11434/v1/chat/completions"
/// model = "llama3"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AgentConfig {
    /// Completion service used on the conversational path.
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AgentConfig {
    /// Load configuration from a TOML file, or use defaults if it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
