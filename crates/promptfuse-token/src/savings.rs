//! Net savings from dictionary-encoding repeated phrases.
//!
//! Replacing a phrase that occurs `count` times saves `count - dict_cost`
//! tokens, where `dict_cost` is what one dictionary entry costs. Phrases that
//! don't pay for their entry are left out.

use std::collections::HashMap;

/// Net savings per phrase, keeping only strictly positive values.
pub fn savings_by_phrase(
    counts: &HashMap<String, usize>,
    dict_cost: usize,
) -> HashMap<String, usize> {
    counts
        .iter()
        .filter(|(_, count)| **count > dict_cost)
        .map(|(phrase, &count)| (phrase.clone(), count - dict_cost))
        .collect()
}

/// Sum of positive net savings across all phrases.
pub fn total_savings(counts: &HashMap<String, usize>, dict_cost: usize) -> usize {
    counts
        .values()
        .map(|&count| count.saturating_sub(dict_cost))
        .sum()
}
