//! Core domain types for word filtering
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable.

pub mod clue;
mod constraint;
mod word_list;

pub use clue::{Clue, ClueParseError, LetterAt, parse_clue_list};
pub use constraint::LetterConstraint;
pub use word_list::{WordList, WordListError};
