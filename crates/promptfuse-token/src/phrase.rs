//! Phrase reconstruction and repetition counting.
//!
//! A phrase is the human-readable text of `length` consecutive tokens.
//! Sub-word tokenizers usually carry the word-separating space inside the
//! next fragment (" am"), so fragments are glued as emitted and a space is
//! only added where two word fragments would otherwise run together.
//!
//! Fragments are joined as raw bytes and decoded once per window, so a
//! character split across tokens comes back whole inside the phrase.

use std::collections::HashMap;
use tracing::debug;

use crate::tokenizer::Token;

/// Build the phrase covering `tokens[start..start + length]`.
///
/// Returns `None` when the window runs past the end of the sequence.
pub fn build_phrase(tokens: &[Token], start: usize, length: usize) -> Option<String> {
    let end = start.checked_add(length)?;
    let window = tokens.get(start..end)?;

    let mut phrase: Vec<u8> = Vec::new();
    let mut prev: Option<&str> = None;
    for token in window {
        let curr = token.text.as_str();
        if let Some(prev) = prev {
            if needs_space(prev, curr) {
                phrase.push(b' ');
            }
        }
        phrase.extend_from_slice(&token.bytes);
        prev = Some(curr);
    }

    Some(String::from_utf8_lossy(&phrase).into_owned())
}

/// Count every phrase of `length` tokens, one sample per window start.
///
/// Windows overlap, so "A A A" with length 2 counts "A A" twice.
pub fn count_phrase_repetition(tokens: &[Token], length: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    if length <= tokens.len() {
        for start in 0..=tokens.len() - length {
            if let Some(phrase) = build_phrase(tokens, start, length) {
                *counts.entry(phrase).or_insert(0) += 1;
            }
        }
    }

    debug!(
        tokens = tokens.len(),
        length,
        distinct = counts.len(),
        "counted phrase repetitions"
    );
    counts
}

fn needs_space(prev: &str, curr: &str) -> bool {
    is_word(curr) && !prev.ends_with(' ') && !curr.starts_with(' ') && !starts_with_symbol(curr)
}

/// True if the fragment contains at least one letter.
fn is_word(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// True if the first character is neither a letter, a number, nor whitespace.
fn starts_with_symbol(s: &str) -> bool {
    match s.chars().next() {
        Some(c) => !c.is_alphabetic() && !c.is_numeric() && !c.is_whitespace(),
        None => false,
    }
}
