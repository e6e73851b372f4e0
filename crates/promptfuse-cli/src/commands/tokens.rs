//! Token listing command.

use anyhow::{Context, Result};
use clap::Args;
use promptfuse_core::FileSettings;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct TokensArgs {
    /// File to tokenize
    pub file: PathBuf,

    /// Model whose tokenizer to use
    #[arg(short, long, env = "PROMPTFUSE_MODEL")]
    pub model: Option<String>,

    /// Show at most this many tokens (0 shows all)
    #[arg(long, default_value = "100")]
    pub limit: usize,

    /// Print tokens as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: TokensArgs, settings: &FileSettings) -> Result<()> {
    let model = settings.model_or(args.model);
    let tokens = promptfuse_token::tokenize(&args.file, &model)
        .with_context(|| format!("Failed to tokenize {}", args.file.display()))?;

    let shown = if args.limit == 0 {
        &tokens[..]
    } else {
        &tokens[..args.limit.min(tokens.len())]
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        output::print_tokens(shown, tokens.len());
    }

    Ok(())
}
