use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use deepfake_agent::DeepfakeAgent;
use deepfake_core::Message;
use deepfake_llm::{CompletionConfig, HttpCompletionService};
use tracing::warn;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct ReplyArgs {
    /// JSON array of `{"role", "content"}` messages, oldest first. Reads stdin when omitted.
    #[arg(long)]
    pub history: Option<PathBuf>,
}

/// Parse a message history.
///
/// Blank or malformed input is an empty conversation, which the agent answers
/// with its welcome text.
pub fn parse_history(input: &str) -> Vec<Message> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(input).unwrap_or_else(|e| {
        warn!(error = %e, "malformed message history, treating as empty");
        Vec::new()
    })
}

fn read_history(args: &ReplyArgs) -> anyhow::Result<Vec<Message>> {
    let input = match &args.history {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(parse_history(&input))
}

pub async fn run(
    completion: CompletionConfig,
    args: &ReplyArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let messages = read_history(args)?;
    let service = HttpCompletionService::new(completion)?;
    let agent = DeepfakeAgent::new(Arc::new(service));

    let turn = agent.handle(&messages).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&turn)?);
        }
        OutputFormat::Text => {
            println!("{}", turn.reply);
        }
    }

    Ok(())
}
