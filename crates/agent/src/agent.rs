//! The per-turn request handler.
//!
//! A hosting runtime calls [`DeepfakeAgent::handle`] once per incoming message
//! batch with the full history, delivers the returned reply, and then waits
//! for the next user message as instructed by [`NextStep`].

use std::sync::Arc;

use deepfake_core::{FileHash, Message, ReportError, WELCOME_MESSAGE, analyze, render_report};
use deepfake_llm::CompletionService;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AgentError;
use crate::intent::{Intent, classify};
use crate::persona::with_persona;

/// What the runtime should do once the reply is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    AwaitUserInput,
}

/// Result of one agent turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTurn {
    /// Path the turn was routed through.
    pub intent: Intent,
    /// Text to append to the conversation.
    pub reply: String,
    pub next: NextStep,
}

impl AgentTurn {
    pub fn new(intent: Intent, reply: impl Into<String>) -> Self {
        Self {
            intent,
            reply: reply.into(),
            next: NextStep::AwaitUserInput,
        }
    }
}

/// Deepfake detection agent.
///
/// Stateless apart from its completion service handle; a single instance can
/// serve any number of independent conversations.
#[derive(Debug, Clone)]
pub struct DeepfakeAgent {
    completion: Arc<dyn CompletionService>,
}

impl DeepfakeAgent {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Produce exactly one reply for `messages` (oldest first).
    ///
    /// Completion failures on the conversational path are returned as-is;
    /// nothing else in a turn can fail in practice.
    pub async fn handle(&self, messages: &[Message]) -> Result<AgentTurn, AgentError> {
        let intent = classify(messages);
        debug!(?intent, messages = messages.len(), "classified turn");

        let reply = match intent {
            Intent::Welcome => WELCOME_MESSAGE.to_owned(),
            Intent::Analyze => {
                let text = messages.last().map_or("", |m| m.content.as_str());
                analysis_reply(text)?
            }
            Intent::Converse => self.completion.complete(&with_persona(messages)).await?,
        };

        Ok(AgentTurn::new(intent, reply))
    }
}

/// Run the mock analysis for a message and render its report.
pub fn analysis_reply(text: &str) -> Result<String, ReportError> {
    let hash = FileHash::from_message(text);
    let result = analyze(hash.as_str());
    info!(
        file_hash = %hash,
        is_deepfake = result.is_deepfake,
        confidence = result.confidence,
        "mock analysis complete"
    );
    render_report(&hash, &result)
}
