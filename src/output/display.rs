//! Display functions for command results

use super::formatters::{format_clues, format_columns, mark_position, survival_bar};
use crate::commands::{CheckResult, FilterResult};
use crate::solver::Verdict;
use colored::Colorize;

const WORDS_PER_ROW: usize = 8;

/// Print the result of filtering the word list
pub fn print_filter_result(result: &FilterResult, verbose: bool) {
    if verbose {
        println!("\n{}", "─".repeat(60).cyan());
        println!("Clues: {}", format_clues(&result.clues).bright_yellow());
        println!(
            "Kept:  [{}] {} of {}",
            survival_bar(result.matched, result.total_words, 30).green(),
            result.matched,
            result.total_words
        );
        println!("{}", "─".repeat(60).cyan());
    }

    if result.count_only {
        println!("{}", result.matched);
        return;
    }

    if result.matched == 0 {
        println!("{}", "❌ No words match these clues".red().bold());
        return;
    }

    for row in format_columns(&result.answers, WORDS_PER_ROW) {
        println!("{row}");
    }

    if result.is_truncated() {
        println!(
            "{}",
            format!(
                "… {} more (showing {} of {})",
                result.matched - result.answers.len(),
                result.answers.len(),
                result.matched
            )
            .bright_black()
        );
    }
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("Clues: {}", format_clues(&result.clues).bright_yellow());

    let word = match result.verdict {
        Verdict::ForbiddenPosition { position, .. } => mark_position(&result.word, position),
        _ => result.word.clone(),
    };

    if result.verdict.is_candidate() {
        println!(
            "{} {}: {}",
            "✅".green(),
            word.to_uppercase().bright_white().bold(),
            result.verdict.to_string().green()
        );
    } else {
        println!(
            "{} {}: {}",
            "❌".red(),
            word.to_uppercase().bright_white().bold(),
            result.verdict.to_string().red()
        );
    }
}
