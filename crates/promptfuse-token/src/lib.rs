//! # PromptFuse Token
//!
//! Estimates how many tokens a file would save if its repeated
//! fixed-length token phrases were replaced by dictionary references.
//!
//! The pipeline is tokenize → count phrase repetitions → subtract the
//! per-entry dictionary cost → report.

pub mod analyzer;
pub mod phrase;
pub mod reporter;
pub mod savings;
pub mod tokenizer;

pub use analyzer::{Analysis, AnalysisConfig, DEFAULT_DICT_ENTRY_COST, analyze_tokens};
pub use phrase::{build_phrase, count_phrase_repetition};
pub use reporter::{PhraseSavings, SavingsReport};
pub use savings::{savings_by_phrase, total_savings};
pub use tokenizer::{TiktokenTokenizer, Token, Tokenizer, read_text, tokenize, tokenize_text};
