//! Filter stages and right-to-left composition
//!
//! Each stage is a pure function from a word sequence to a word sequence.
//! `compose` applies the last stage first, so a pipeline written as
//! `[sort, positions, presence, exclusion]` runs exclusion first and sort last.

use crate::core::LetterConstraint;
use feruca::Collator;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// A boxed unary transformation
pub type Stage<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Compose stages right to left
///
/// # Examples
/// ```
/// use wordle_filter::solver::pipeline::{Stage, compose};
///
/// let double: Stage<i32> = Box::new(|x: i32| x * 2);
/// let increment: Stage<i32> = Box::new(|x: i32| x + 1);
///
/// // increment runs first
/// let pipeline = compose(vec![double, increment]);
/// assert_eq!(pipeline(3), 8);
/// ```
pub fn compose<'a, T: 'a>(stages: Vec<Stage<'a, T>>) -> impl Fn(T) -> T + 'a {
    move |input| stages.iter().rev().fold(input, |value, stage| stage(value))
}

/// Drop words containing any excluded letter
#[must_use]
pub fn exclude_wrong_chars(excluded: &FxHashSet<char>) -> Stage<'_, Vec<String>> {
    Box::new(move |words: Vec<String>| {
        retain_logged("exclude-wrong-chars", words, |w| {
            first_excluded(w, excluded).is_none()
        })
    })
}

/// Keep words containing every constrained letter
#[must_use]
pub fn include_correct_chars(
    constraints: &FxHashMap<char, LetterConstraint>,
) -> Stage<'_, Vec<String>> {
    Box::new(move |words: Vec<String>| {
        retain_logged("include-correct-chars", words, |w| {
            first_missing(w, constraints).is_none()
        })
    })
}

/// Drop words with a constrained letter at one of its forbidden positions
#[must_use]
pub fn exclude_incorrect_positions(
    constraints: &FxHashMap<char, LetterConstraint>,
    word_length: usize,
) -> Stage<'_, Vec<String>> {
    Box::new(move |words: Vec<String>| {
        retain_logged("exclude-incorrect-positions", words, |w| {
            first_forbidden(w, constraints, word_length).is_none()
        })
    })
}

/// Sort ascending in Unicode collation order (see `compare_words`)
#[must_use]
pub fn sort_words<'a>() -> Stage<'a, Vec<String>> {
    Box::new(|mut words: Vec<String>| {
        let mut collator = Collator::default();
        words.sort_by(|a, b| collator.collate(a.as_str(), b.as_str()));
        words
    })
}

/// Compare with the Unicode Collation Algorithm's root order
///
/// Base letters decide first (`é` sorts with `e`), then accents, then case
/// with lowercase before uppercase.
#[must_use]
pub fn compare_words(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// First letter of `word` (in reading order) that is excluded
#[must_use]
pub fn first_excluded(word: &str, excluded: &FxHashSet<char>) -> Option<char> {
    word.chars().find(|c| excluded.contains(c))
}

/// Smallest constrained letter that `word` does not contain
#[must_use]
pub fn first_missing(word: &str, constraints: &FxHashMap<char, LetterConstraint>) -> Option<char> {
    constraints
        .keys()
        .filter(|&&letter| !word.contains(letter))
        .min()
        .copied()
}

/// First (letter, position) in `word` that a constraint forbids
#[must_use]
pub fn first_forbidden(
    word: &str,
    constraints: &FxHashMap<char, LetterConstraint>,
    word_length: usize,
) -> Option<(char, usize)> {
    word.chars().enumerate().find_map(|(position, letter)| {
        constraints
            .get(&letter)
            .filter(|constraint| constraint.forbids(position, word_length))
            .map(|_| (letter, position))
    })
}

fn retain_logged(
    stage: &str,
    words: Vec<String>,
    keep: impl Fn(&str) -> bool,
) -> Vec<String> {
    let before = words.len();
    let kept: Vec<String> = words.into_iter().filter(|w| keep(w.as_str())).collect();
    debug!("{stage}: {before} -> {} words", kept.len());
    kept
}
