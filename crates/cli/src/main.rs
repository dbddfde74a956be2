//! Deepfake agent CLI
//!
//! Runs single agent turns from the command line. Each invocation reads one
//! conversation history and prints one reply.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AgentConfig;

/// Deepfake agent — answer a conversation turn or run the mock analyzer.
#[derive(Parser, Debug)]
#[command(name = "deepfake-agent", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "deepfake-agent.toml", global = true)]
    config: PathBuf,

    /// Override the completion endpoint.
    #[arg(long, env = "DEEPFAKE_AGENT_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Override the completion model.
    #[arg(long, env = "DEEPFAKE_AGENT_MODEL", global = true)]
    model: Option<String>,

    /// API key for the completion service.
    #[arg(long, env = "DEEPFAKE_AGENT_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer one conversation turn.
    Reply(commands::reply::ReplyArgs),
    /// Run the mock analyzer on a hash and print the report.
    Analyze(commands::analyze::AnalyzeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AgentConfig::load(&cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        config.completion.endpoint = endpoint;
    }
    if let Some(model) = cli.model {
        config.completion.model = model;
    }
    if let Some(api_key) = cli.api_key {
        config.completion.api_key = api_key;
    }

    match cli.command {
        Command::Reply(args) => commands::reply::run(config.completion, &args, &cli.format).await,
        Command::Analyze(args) => commands::analyze::run(&args, &cli.format),
    }
}
