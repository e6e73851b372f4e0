//! Tokenizer adapter.
//!
//! Maps text to an ordered sequence of [`Token`]s. The analysis code only
//! sees the [`Tokenizer`] trait; [`TiktokenTokenizer`] is the tiktoken-rs
//! backed implementation selected by model name.

use promptfuse_core::{PromptFuseError, PromptFuseResult};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// A single token and its decoded fragment.
///
/// `bytes` is the exact fragment; a lone token may hold only part of a
/// multi-byte character. `text` is its lossy UTF-8 rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub index: usize,
    pub id: u32,
    pub bytes: Vec<u8>,
    pub text: String,
}

impl Token {
    pub fn new(index: usize, id: u32, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Self {
            index,
            id,
            bytes,
            text,
        }
    }
}

/// Encoder capability used by the analysis pipeline.
pub trait Tokenizer {
    /// Encode text into token ids, in order.
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Decode a single token id back to its raw bytes.
    fn decode_token(&self, id: u32) -> Vec<u8>;
}

/// BPE tokenizer backed by tiktoken-rs.
pub struct TiktokenTokenizer {
    model: String,
    bpe: tiktoken_rs::CoreBPE,
}

impl TiktokenTokenizer {
    /// Load the encoding used by `model` (e.g. `gpt-4` → cl100k_base).
    pub fn for_model(model: &str) -> PromptFuseResult<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|e| PromptFuseError::tokenization(model, e.to_string()))?;

        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    fn decode_token(&self, id: u32) -> Vec<u8> {
        self.bpe
            ._decode_native_and_split(vec![id])
            .next()
            .unwrap_or_default()
    }
}

/// Tokenize in-memory text with any tokenizer.
pub fn tokenize_text<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str) -> Vec<Token> {
    tokenizer
        .encode(text)
        .into_iter()
        .enumerate()
        .map(|(index, id)| Token::new(index, id, tokenizer.decode_token(id)))
        .collect()
}

/// Read a file as text. Invalid UTF-8 sequences are replaced.
pub fn read_text(path: &Path) -> PromptFuseResult<String> {
    let bytes = std::fs::read(path).map_err(|e| PromptFuseError::file_read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read a file and tokenize it with the encoding for `model`.
pub fn tokenize(path: &Path, model: &str) -> PromptFuseResult<Vec<Token>> {
    let text = read_text(path)?;
    let tokenizer = TiktokenTokenizer::for_model(model)?;
    let tokens = tokenize_text(&tokenizer, &text);

    debug!(
        path = %path.display(),
        model = tokenizer.model(),
        bytes = text.len(),
        tokens = tokens.len(),
        "tokenized file"
    );
    Ok(tokens)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Tokenizer;
    use std::cell::RefCell;

    /// Deterministic tokenizer that splits on spaces, keeping each space
    /// attached to the word that follows it ("Go is" → "Go", " is").
    #[derive(Default)]
    pub struct WordTokenizer {
        vocab: RefCell<Vec<String>>,
    }

    impl WordTokenizer {
        fn id_for(&self, piece: &str) -> u32 {
            let mut vocab = self.vocab.borrow_mut();
            let pos = match vocab.iter().position(|v| v == piece) {
                Some(pos) => pos,
                None => {
                    vocab.push(piece.to_string());
                    vocab.len() - 1
                }
            };
            pos as u32
        }
    }

    impl Tokenizer for WordTokenizer {
        fn encode(&self, text: &str) -> Vec<u32> {
            let mut pieces = Vec::new();
            let mut current = String::new();
            for ch in text.chars() {
                if ch == ' ' && !current.is_empty() && !current.ends_with(' ') {
                    pieces.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            if !current.is_empty() {
                pieces.push(current);
            }
            pieces.iter().map(|p| self.id_for(p)).collect()
        }

        fn decode_token(&self, id: u32) -> Vec<u8> {
            self.vocab
                .borrow()
                .get(id as usize)
                .map(|piece| piece.clone().into_bytes())
                .unwrap_or_default()
        }
    }
}
