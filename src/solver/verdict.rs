//! Why a single word is or is not a candidate

use std::fmt;

/// Outcome of checking one word against the accumulated clues
///
/// Rejections are reported for the first pipeline stage that drops the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Word survives every stage
    Candidate,
    /// Word is not in the solver's word list
    NotInList,
    /// Word contains a letter known to be absent
    ContainsExcluded { letter: char },
    /// Word lacks a letter known to be present
    MissingLetter { letter: char },
    /// Word has a letter at a position it is known not to occupy
    ForbiddenPosition { letter: char, position: usize },
}

impl Verdict {
    #[must_use]
    pub const fn is_candidate(&self) -> bool {
        matches!(self, Self::Candidate)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidate => write!(f, "possible answer"),
            Self::NotInList => write!(f, "not in word list"),
            Self::ContainsExcluded { letter } => {
                write!(f, "contains '{letter}', which is not in the word")
            }
            Self::MissingLetter { letter } => {
                write!(f, "does not contain '{letter}'")
            }
            Self::ForbiddenPosition { letter, position } => {
                write!(f, "has '{letter}' at position {position}, where it cannot be")
            }
        }
    }
}
