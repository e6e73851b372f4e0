//! Savings reports.
//!
//! Turns an [`Analysis`] into an ordered list of profitable phrases with
//! a human-readable rendering and a JSON form.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;

use crate::analyzer::{Analysis, AnalysisConfig};

/// Savings for one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseSavings {
    pub phrase: String,
    pub occurrences: usize,
    pub savings: usize,
}

/// Full savings report for one file.
#[derive(Debug, Clone, Serialize)]
pub struct SavingsReport {
    pub source: String,
    pub model: String,
    pub phrase_length: usize,
    pub dict_cost: usize,
    pub token_count: usize,
    pub distinct_phrases: usize,
    pub profitable_phrases: usize,
    pub total_savings: usize,
    pub generated_at: DateTime<Utc>,
    /// Sorted by savings (descending), then phrase.
    pub entries: Vec<PhraseSavings>,
}

impl SavingsReport {
    /// Build a report, keeping at most `top` entries (`0` keeps all).
    ///
    /// The total always covers every profitable phrase, shown or not.
    pub fn new(config: &AnalysisConfig, analysis: &Analysis, top: usize) -> Self {
        let mut entries: Vec<PhraseSavings> = analysis
            .savings
            .iter()
            .map(|(phrase, &savings)| PhraseSavings {
                phrase: phrase.clone(),
                occurrences: analysis
                    .counts
                    .get(phrase)
                    .copied()
                    .unwrap_or(savings + analysis.dict_cost),
                savings,
            })
            .collect();
        entries.sort_by(|a, b| {
            Reverse(a.savings)
                .cmp(&Reverse(b.savings))
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        if top > 0 {
            entries.truncate(top);
        }

        Self {
            source: config.file_path.display().to_string(),
            model: config.model_name.clone(),
            phrase_length: analysis.phrase_length,
            dict_cost: analysis.dict_cost,
            token_count: analysis.token_count,
            distinct_phrases: analysis.distinct_phrases(),
            profitable_phrases: analysis.savings.len(),
            total_savings: analysis.total,
            generated_at: Utc::now(),
            entries,
        }
    }

    /// Share of the file's tokens the total would save, in percent.
    pub fn savings_percent(&self) -> f64 {
        if self.token_count > 0 {
            self.total_savings as f64 / self.token_count as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Format the report as a human-readable string.
    pub fn to_display_string(&self) -> String {
        let mut output = String::new();

        output.push_str("Phrase Savings Report\n");
        output.push_str(&format!("{}\n", "─".repeat(50)));
        output.push_str(&format!("Source:            {}\n", self.source));
        output.push_str(&format!("Model:             {}\n", self.model));
        output.push_str(&format!("Phrase length:     {:>8}\n", self.phrase_length));
        output.push_str(&format!("Dictionary cost:   {:>8}\n", self.dict_cost));
        output.push_str(&format!("Total tokens:      {:>8}\n", self.token_count));
        output.push_str(&format!("Distinct phrases:  {:>8}\n", self.distinct_phrases));
        output.push_str(&format!("Profitable:        {:>8}\n", self.profitable_phrases));
        output.push_str(&format!("{}\n", "─".repeat(50)));

        if self.entries.is_empty() {
            output.push_str("No phrase repeats often enough to pay for a dictionary entry.\n");
        } else {
            output.push_str("Top phrases:\n");
            for (i, entry) in self.entries.iter().enumerate() {
                output.push_str(&format!(
                    "  {:>3}. {:>6} saved ({:>5}x) {}\n",
                    i + 1,
                    entry.savings,
                    entry.occurrences,
                    visible(&entry.phrase)
                ));
            }
        }

        output.push_str(&format!(
            "\n  Potential savings: {} tokens ({:.1}%)\n",
            self.total_savings,
            self.savings_percent()
        ));

        output
    }
}

/// Quote a phrase so leading/trailing whitespace and newlines stay visible.
pub fn visible(phrase: &str) -> String {
    format!("{:?}", phrase)
}
