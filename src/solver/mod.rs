//! Constraint solving over a word list
//!
//! This module accumulates clues and filters candidate words through a
//! composed pipeline of pure stages.

mod engine;
mod error;
pub mod pipeline;
mod verdict;

pub use engine::Solver;
pub use error::SolverError;
pub use verdict::Verdict;
