//! Phrase savings analysis command.

use anyhow::{Context, Result};
use clap::Args;
use promptfuse_core::FileSettings;
use promptfuse_token::{AnalysisConfig, SavingsReport};
use std::path::PathBuf;
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// File to analyze
    pub file: PathBuf,

    /// Model whose tokenizer to use (e.g. gpt-4, gpt-4o)
    #[arg(short, long, env = "PROMPTFUSE_MODEL")]
    pub model: Option<String>,

    /// Phrase length in tokens
    #[arg(short, long, env = "PROMPTFUSE_PHRASE_LENGTH")]
    pub length: Option<usize>,

    /// Number of phrases to list (0 lists all)
    #[arg(long)]
    pub top: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, settings: &FileSettings) -> Result<()> {
    let config = AnalysisConfig::new(
        args.file,
        settings.model_or(args.model),
        settings.phrase_length_or(args.length)?,
    );
    let top = settings.top_or(args.top);

    info!(
        path = %config.file_path.display(),
        model = %config.model_name,
        phrase_length = config.phrase_length,
        "analyzing"
    );

    let analysis = config
        .analyze()
        .with_context(|| format!("Analysis failed for {}", config.file_path.display()))?;
    let report = SavingsReport::new(&config, &analysis, top);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        output::print_report(&report);
    }

    Ok(())
}
