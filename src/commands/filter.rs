//! Word filtering command
//!
//! Runs the solver's pipeline and packages the outcome for display.

use crate::core::Clue;
use crate::solver::Solver;

/// Configuration for a filter run
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Show at most this many answers
    pub limit: Option<usize>,
    /// Only report how many answers match
    pub count_only: bool,
}

/// Result of filtering the word list
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub total_words: usize,
    pub matched: usize,
    pub clues: Vec<Clue>,
    pub answers: Vec<String>,
    pub count_only: bool,
}

impl FilterResult {
    /// Whether `answers` holds fewer words than matched
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.answers.len() < self.matched
    }
}

/// Filter the solver's word list with its accumulated clues
#[must_use]
pub fn run_filter(solver: &Solver, config: &FilterConfig) -> FilterResult {
    let mut answers = solver.possible_answers();
    let matched = answers.len();

    if config.count_only {
        answers.clear();
    } else if let Some(limit) = config.limit {
        answers.truncate(limit);
    }

    FilterResult {
        total_words: solver.words().len(),
        matched,
        clues: solver.clues(),
        answers,
        count_only: config.count_only,
    }
}
