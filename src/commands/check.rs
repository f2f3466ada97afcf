//! Single word check command
//!
//! Reports whether one word is still a candidate, and which clue rules it out.

use crate::core::Clue;
use crate::solver::{Solver, Verdict};

/// Result of checking a single word
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub word: String,
    pub verdict: Verdict,
    pub clues: Vec<Clue>,
}

/// Check `word` against the solver's accumulated clues
#[must_use]
pub fn check_word(solver: &Solver, word: &str) -> CheckResult {
    let word = word.trim().to_lowercase();
    let verdict = solver.explain(&word);

    CheckResult {
        word,
        verdict,
        clues: solver.clues(),
    }
}
