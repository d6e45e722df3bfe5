//! Formatting utilities for terminal output

use crate::scoring::ScoredWord;

/// Format a tier on one line, each entry as ` word score `
#[must_use]
pub fn format_tier_inline(tier: &[ScoredWord]) -> String {
    tier.iter().map(|s| format!(" {s} ")).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize `noun` for `count`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
