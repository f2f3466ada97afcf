//! Formatting utilities for terminal output

use crate::core::Clue;

/// Format clues in their text notation, space separated
#[must_use]
pub fn format_clues(clues: &[Clue]) -> String {
    if clues.is_empty() {
        return "(none)".to_string();
    }

    clues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in rows of `columns` entries
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| row.join("  "))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing what share of the word list survived the filter
#[must_use]
pub fn survival_bar(matched: usize, total: usize, width: usize) -> String {
    create_progress_bar(matched as f64, total as f64, width)
}

/// Bracket the letter at `position`, e.g. `tra[c]e`
#[must_use]
pub fn mark_position(word: &str, position: usize) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == position {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect()
}
