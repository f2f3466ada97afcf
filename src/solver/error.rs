//! Solver error types

use crate::core::WordListError;
use std::fmt;

/// Error type for solver construction and clue registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The word list cannot back a solver
    InvalidWordList(WordListError),
    /// A pinned position was given for a letter that already has constraints
    ExistingConstraint { letter: char },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordList(err) => write!(f, "Invalid word list: {err}"),
            Self::ExistingConstraint { letter } => write!(
                f,
                "Invalid positive position for letter '{letter}', it already has position constraints"
            ),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWordList(err) => Some(err),
            Self::ExistingConstraint { .. } => None,
        }
    }
}

impl From<WordListError> for SolverError {
    fn from(err: WordListError) -> Self {
        Self::InvalidWordList(err)
    }
}
