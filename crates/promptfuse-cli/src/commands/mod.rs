//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use promptfuse_core::FileSettings;
use std::path::PathBuf;

pub mod analyze;
pub mod tokens;

/// PromptFuse - token savings from phrase dictionaries
#[derive(Parser)]
#[command(name = "promptfuse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./promptfuse.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate savings from dictionary-encoding repeated phrases
    Analyze(analyze::AnalyzeArgs),

    /// Show how a file is split into tokens
    Tokens(tokens::TokensArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let settings = self.load_settings()?;

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, &settings).await,
            Commands::Tokens(args) => tokens::execute(args, &settings).await,
        }
    }

    fn load_settings(&self) -> Result<FileSettings> {
        let settings = match &self.config {
            Some(path) => FileSettings::load(path)?,
            None => FileSettings::discover(&std::env::current_dir()?)?,
        };
        Ok(settings)
    }
}
