//! Savings analysis for a single file.
//!
//! Runs tokenize → count repetitions → per-phrase savings → total savings.
//! Only tokenization can fail; the remaining stages are total functions.

use promptfuse_core::PromptFuseResult;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::phrase::count_phrase_repetition;
use crate::savings::{savings_by_phrase, total_savings};
use crate::tokenizer::{Token, Tokenizer, read_text, tokenize, tokenize_text};

/// Tokens one dictionary entry costs.
pub const DEFAULT_DICT_ENTRY_COST: usize = 4;

/// Input for one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    pub file_path: PathBuf,
    pub model_name: String,
    pub phrase_length: usize,
}

/// Result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub phrase_length: usize,
    pub dict_cost: usize,
    pub token_count: usize,
    /// Occurrences of every phrase seen, profitable or not.
    pub counts: HashMap<String, usize>,
    /// Net savings for phrases that pay for their dictionary entry.
    pub savings: HashMap<String, usize>,
    pub total: usize,
}

impl Analysis {
    pub fn distinct_phrases(&self) -> usize {
        self.counts.len()
    }
}

impl AnalysisConfig {
    pub fn new(
        file_path: impl Into<PathBuf>,
        model_name: impl Into<String>,
        phrase_length: usize,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            model_name: model_name.into(),
            phrase_length,
        }
    }

    /// Tokenize the file with the configured model and compute savings.
    pub fn analyze(&self) -> PromptFuseResult<Analysis> {
        let tokens = tokenize(&self.file_path, &self.model_name)?;
        let analysis = analyze_tokens(&tokens, self.phrase_length, DEFAULT_DICT_ENTRY_COST);

        info!(
            path = %self.file_path.display(),
            model = %self.model_name,
            tokens = analysis.token_count,
            profitable = analysis.savings.len(),
            total = analysis.total,
            "analysis complete"
        );
        Ok(analysis)
    }

    /// Same as [`analyze`](Self::analyze) with a caller-supplied tokenizer.
    pub fn analyze_with<T: Tokenizer + ?Sized>(&self, tokenizer: &T) -> PromptFuseResult<Analysis> {
        let text = read_text(&self.file_path)?;
        let tokens = tokenize_text(tokenizer, &text);
        Ok(analyze_tokens(&tokens, self.phrase_length, DEFAULT_DICT_ENTRY_COST))
    }
}

/// Count phrases of `phrase_length` and compute savings at `dict_cost`.
pub fn analyze_tokens(tokens: &[Token], phrase_length: usize, dict_cost: usize) -> Analysis {
    let counts = count_phrase_repetition(tokens, phrase_length);
    let savings = savings_by_phrase(&counts, dict_cost);
    let total = total_savings(&counts, dict_cost);

    debug!(
        distinct = counts.len(),
        profitable = savings.len(),
        total,
        "computed savings"
    );

    Analysis {
        phrase_length,
        dict_cost,
        token_count: tokens.len(),
        counts,
        savings,
        total,
    }
}
