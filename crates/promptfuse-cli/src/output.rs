//! Terminal output formatting.

use colored::Colorize;
use promptfuse_token::reporter::visible;
use promptfuse_token::{SavingsReport, Token};
use unicode_width::UnicodeWidthStr;

/// Print a savings report.
pub fn print_report(report: &SavingsReport) {
    println!("{}", "Phrase Savings".bold());
    println!("{}", "─".repeat(60));
    println!("  File:          {}", report.source);
    println!("  Model:         {}", report.model.cyan());
    println!("  Tokens:        {}", report.token_count.to_string().cyan());
    println!(
        "  Phrases:       {} distinct, {} profitable ({} tokens each, entry cost {})",
        report.distinct_phrases,
        report.profitable_phrases.to_string().green(),
        report.phrase_length,
        report.dict_cost
    );
    println!("{}", "─".repeat(60));

    if report.entries.is_empty() {
        println!("{}", "No phrase repeats often enough to pay for a dictionary entry.".dimmed());
    } else {
        // "  123. 123456 saved  12345x  "
        let phrase_width = term_width().saturating_sub(30).max(10);

        for (i, entry) in report.entries.iter().enumerate() {
            let saved = format!("{:>6}", entry.savings);
            let saved = if entry.savings >= 100 {
                saved.green().bold()
            } else if entry.savings >= 10 {
                saved.green()
            } else {
                saved.normal()
            };
            println!(
                "  {:>3}. {} saved {:>6}x  {}",
                i + 1,
                saved,
                entry.occurrences,
                truncate_visual(&visible(&entry.phrase), phrase_width)
            );
        }

        if report.profitable_phrases > report.entries.len() {
            println!(
                "  {}",
                format!(
                    "... {} more profitable phrases not shown",
                    report.profitable_phrases - report.entries.len()
                )
                .dimmed()
            );
        }
    }

    println!("{}", "─".repeat(60));
    println!(
        "  Potential savings: {} tokens ({:.1}%)",
        report.total_savings.to_string().green().bold(),
        report.savings_percent()
    );
}

/// Print a token listing.
pub fn print_tokens(tokens: &[Token], total: usize) {
    if tokens.is_empty() {
        println!("{}", "No tokens.".dimmed());
        return;
    }

    let text_width = term_width().saturating_sub(22).max(10);

    println!("{:>6}  {:>8}  {}", "INDEX", "ID", "TEXT");
    println!("{}", "─".repeat(40));
    for token in tokens {
        println!(
            "{:>6}  {:>8}  {}",
            token.index,
            token.id.to_string().dimmed(),
            truncate_visual(&visible(&token.text), text_width)
        );
    }

    if total > tokens.len() {
        println!("{}", format!("... {} of {} tokens shown", tokens.len(), total).dimmed());
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
