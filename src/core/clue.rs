//! Clues about the solution word and their text notation
//!
//! Notation (positions are zero-indexed):
//! - `-x`  letter `x` is not in the word
//! - `r~1` letter `r` is in the word, but not at position 1
//! - `c@0` letter `c` is at position 0

use std::fmt;
use std::str::FromStr;

/// A single piece of information about the solution word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Letter does not appear anywhere
    Absent { letter: char },
    /// Letter appears, but not at `position`
    Misplaced { letter: char, position: usize },
    /// Letter appears at `position`
    Pinned { letter: char, position: usize },
}

/// A letter paired with a zero-indexed position, written `c@0`, `c~0` or `c0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterAt {
    pub letter: char,
    pub position: usize,
}

/// Error type for malformed clue text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueParseError {
    Empty,
    InvalidLetter(String),
    InvalidPosition(String),
    UnknownForm(String),
    Line {
        line: usize,
        source: Box<ClueParseError>,
    },
}

impl fmt::Display for ClueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Clue is empty"),
            Self::InvalidLetter(text) => {
                write!(f, "Expected a single letter, got '{text}'")
            }
            Self::InvalidPosition(text) => {
                write!(f, "Expected a position number, got '{text}'")
            }
            Self::UnknownForm(text) => write!(
                f,
                "Unrecognized clue '{text}' (use -x, r~1 or c@0)"
            ),
            Self::Line { line, source } => write!(f, "Line {line}: {source}"),
        }
    }
}

impl std::error::Error for ClueParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Line { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Clue {
    /// The letter this clue is about
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Absent { letter }
            | Self::Misplaced { letter, .. }
            | Self::Pinned { letter, .. } => letter,
        }
    }
}

impl FromStr for Clue {
    type Err = ClueParseError;

    /// Parse a clue from its text notation
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::Clue;
    ///
    /// assert_eq!("-g".parse::<Clue>(), Ok(Clue::Absent { letter: 'g' }));
    /// assert_eq!("r~1".parse::<Clue>(), Ok(Clue::Misplaced { letter: 'r', position: 1 }));
    /// assert_eq!("c@0".parse::<Clue>(), Ok(Clue::Pinned { letter: 'c', position: 0 }));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ClueParseError::Empty);
        }

        if let Some(rest) = text.strip_prefix('-') {
            return single_letter(rest).map(|letter| Self::Absent { letter });
        }
        if let Some((letter, position)) = text.split_once('~') {
            return Ok(Self::Misplaced {
                letter: single_letter(letter)?,
                position: parse_position(position)?,
            });
        }
        if let Some((letter, position)) = text.split_once('@') {
            return Ok(Self::Pinned {
                letter: single_letter(letter)?,
                position: parse_position(position)?,
            });
        }

        Err(ClueParseError::UnknownForm(text.to_string()))
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent { letter } => write!(f, "-{letter}"),
            Self::Misplaced { letter, position } => write!(f, "{letter}~{position}"),
            Self::Pinned { letter, position } => write!(f, "{letter}@{position}"),
        }
    }
}

impl FromStr for LetterAt {
    type Err = ClueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let first = chars.next().ok_or(ClueParseError::Empty)?;

        let (letter, position) = text
            .split_once('@')
            .or_else(|| text.split_once('~'))
            .unwrap_or_else(|| text.split_at(first.len_utf8()));

        Ok(Self {
            letter: single_letter(letter)?,
            position: parse_position(position)?,
        })
    }
}

impl fmt::Display for LetterAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter, self.position)
    }
}

/// Parse a clue file: one clue per line, `#` starts a comment
///
/// # Errors
///
/// Returns `ClueParseError::Line` wrapping the first malformed clue.
pub fn parse_clue_list(text: &str) -> Result<Vec<Clue>, ClueParseError> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let content = line.split('#').next().unwrap_or_default().trim();
            (!content.is_empty()).then_some((i + 1, content))
        })
        .map(|(line, content)| {
            content.parse().map_err(|e| ClueParseError::Line {
                line,
                source: Box::new(e),
            })
        })
        .collect()
}

fn single_letter(text: &str) -> Result<char, ClueParseError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Ok(letter.to_ascii_lowercase()),
        _ => Err(ClueParseError::InvalidLetter(trimmed.to_string())),
    }
}

fn parse_position(text: &str) -> Result<usize, ClueParseError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| ClueParseError::InvalidPosition(trimmed.to_string()))
}
