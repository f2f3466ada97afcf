//! Command implementations

pub mod check;
pub mod filter;

pub use check::{CheckResult, check_word};
pub use filter::{FilterConfig, FilterResult, run_filter};

use crate::core::Clue;
use crate::solver::{Solver, SolverError};

/// Build a solver over `words` and register `clues` in order
///
/// # Errors
///
/// Returns `SolverError` if the word list is invalid or a pinned clue conflicts
/// with an earlier clue for the same letter.
pub fn build_solver<I>(words: Vec<String>, clues: I) -> Result<Solver, SolverError>
where
    I: IntoIterator<Item = Clue>,
{
    let mut solver = Solver::new(words)?;
    solver.apply_all(clues)?;
    Ok(solver)
}
