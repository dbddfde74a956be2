use clap::Args;
use deepfake_core::{DetectionResult, FileHash, analyze, render_report};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct AnalyzeArgs {
    /// File hash to analyze.
    pub hash: Option<String>,
    /// Derive the hash from message text, as a chat turn would.
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalyzeOutput {
    file_hash: FileHash,
    #[serde(flatten)]
    result: DetectionResult,
}

fn resolve_hash(args: &AnalyzeArgs) -> FileHash {
    match (&args.hash, &args.text) {
        (Some(hash), _) => FileHash::new(hash.clone()),
        (None, Some(text)) => FileHash::from_message(text),
        (None, None) => FileHash::placeholder(),
    }
}

pub fn run(args: &AnalyzeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let file_hash = resolve_hash(args);
    let result = analyze(file_hash.as_str());

    match format {
        OutputFormat::Json => {
            let output = AnalyzeOutput { file_hash, result };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", render_report(&file_hash, &result)?);
        }
    }

    Ok(())
}
