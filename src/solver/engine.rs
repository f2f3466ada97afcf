//! Main constraint solver interface

use super::error::SolverError;
use super::pipeline::{
    compose, exclude_incorrect_positions, exclude_wrong_chars, first_excluded, first_forbidden,
    first_missing, include_correct_chars, sort_words,
};
use super::verdict::Verdict;
use crate::core::{Clue, LetterConstraint, WordList};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Constraint solver over a fixed-length word list
///
/// Accumulates clues through chainable mutators, then filters the word list.
///
/// # Examples
/// ```
/// use wordle_filter::solver::Solver;
///
/// let mut solver = Solver::new(["crate", "crane", "grape", "trace"]).unwrap();
/// let answers = solver
///     .add_excluded_char('g')
///     .add_positive_char_pos('c', 0)
///     .unwrap()
///     .possible_answers();
///
/// assert_eq!(answers, vec!["crane", "crate"]);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    word_list: WordList,
    excluded: FxHashSet<char>,
    constraints: FxHashMap<char, LetterConstraint>,
}

impl Solver {
    /// Create a solver over the given words
    ///
    /// # Errors
    ///
    /// Returns `SolverError::InvalidWordList` if the list is empty or its
    /// words differ in length.
    pub fn new<I, S>(words: I) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_word_list(WordList::new(words)?))
    }

    /// Create a solver over an already validated word list
    #[must_use]
    pub fn from_word_list(word_list: WordList) -> Self {
        Self {
            word_list,
            excluded: FxHashSet::default(),
            constraints: FxHashMap::default(),
        }
    }

    /// Record that `letter` does not appear in the solution
    pub fn add_excluded_char(&mut self, letter: char) -> &mut Self {
        debug!("clue: '{letter}' is absent");
        self.excluded.insert(letter);
        self
    }

    /// Record that `letter` appears in the solution, but not at `position`
    pub fn add_negative_char_pos(&mut self, letter: char, position: usize) -> &mut Self {
        debug!("clue: '{letter}' is present, not at {position}");
        let word_length = self.word_length();
        self.constraints
            .entry(letter)
            .and_modify(|constraint| constraint.exclude(position, word_length))
            .or_insert_with(|| LetterConstraint::excluded_at(position));
        self
    }

    /// Record that `letter` appears in the solution at `position`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ExistingConstraint` if `letter` already has a
    /// misplaced or pinned clue.
    pub fn add_positive_char_pos(
        &mut self,
        letter: char,
        position: usize,
    ) -> Result<&mut Self, SolverError> {
        if self.constraints.contains_key(&letter) {
            return Err(SolverError::ExistingConstraint { letter });
        }

        debug!("clue: '{letter}' is pinned at {position}");
        self.constraints
            .insert(letter, LetterConstraint::PinnedAt(position));
        Ok(self)
    }

    /// Register a parsed clue with the matching mutator
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ExistingConstraint` for a conflicting pinned clue.
    pub fn apply(&mut self, clue: Clue) -> Result<&mut Self, SolverError> {
        match clue {
            Clue::Absent { letter } => Ok(self.add_excluded_char(letter)),
            Clue::Misplaced { letter, position } => Ok(self.add_negative_char_pos(letter, position)),
            Clue::Pinned { letter, position } => self.add_positive_char_pos(letter, position),
        }
    }

    /// Register clues in order, stopping at the first conflict
    ///
    /// # Errors
    ///
    /// Returns the first `SolverError` raised by `apply`.
    pub fn apply_all<I>(&mut self, clues: I) -> Result<&mut Self, SolverError>
    where
        I: IntoIterator<Item = Clue>,
    {
        for clue in clues {
            self.apply(clue)?;
        }
        Ok(self)
    }

    /// Filter the word list through every accumulated clue
    ///
    /// Stages run exclusion, presence, positions, then sort. The result is
    /// a sorted subset of the word list; an empty result means no word fits.
    #[must_use]
    pub fn possible_answers(&self) -> Vec<String> {
        let pipeline = compose(vec![
            sort_words(),
            exclude_incorrect_positions(&self.constraints, self.word_length()),
            include_correct_chars(&self.constraints),
            exclude_wrong_chars(&self.excluded),
        ]);

        pipeline(self.word_list.words().to_vec())
    }

    /// Explain whether `word` would be returned, and which stage drops it if not
    #[must_use]
    pub fn explain(&self, word: &str) -> Verdict {
        if !self.word_list.contains(word) {
            return Verdict::NotInList;
        }
        if let Some(letter) = first_excluded(word, &self.excluded) {
            return Verdict::ContainsExcluded { letter };
        }
        if let Some(letter) = first_missing(word, &self.constraints) {
            return Verdict::MissingLetter { letter };
        }
        if let Some((letter, position)) =
            first_forbidden(word, &self.constraints, self.word_length())
        {
            return Verdict::ForbiddenPosition { letter, position };
        }
        Verdict::Candidate
    }

    /// Accumulated clues in canonical order: absent letters, then per-letter constraints
    #[must_use]
    pub fn clues(&self) -> Vec<Clue> {
        let mut excluded: Vec<char> = self.excluded.iter().copied().collect();
        excluded.sort_unstable();

        let mut constrained: Vec<(&char, &LetterConstraint)> = self.constraints.iter().collect();
        constrained.sort_unstable_by_key(|(letter, _)| **letter);

        let mut clues: Vec<Clue> = excluded
            .into_iter()
            .map(|letter| Clue::Absent { letter })
            .collect();

        for (&letter, constraint) in constrained {
            match constraint {
                LetterConstraint::PinnedAt(position) => clues.push(Clue::Pinned {
                    letter,
                    position: *position,
                }),
                LetterConstraint::ExcludedAt(positions) => {
                    clues.extend(
                        positions
                            .iter()
                            .map(|&position| Clue::Misplaced { letter, position }),
                    );
                }
            }
        }

        clues
    }

    /// Length shared by every word in the list
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_list.word_length()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.word_list.words()
    }

    #[inline]
    #[must_use]
    pub const fn excluded_chars(&self) -> &FxHashSet<char> {
        &self.excluded
    }

    /// Positional constraint recorded for `letter`, if any
    #[must_use]
    pub fn constraint_for(&self, letter: char) -> Option<&LetterConstraint> {
        self.constraints.get(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordListError;

    const SCENARIO: [&str; 4] = ["crate", "crane", "grape", "trace"];

    fn sample_words() -> Vec<&'static str> {
        vec![
            "crane", "slate", "irate", "crate", "grate", "trace", "grape", "react", "caret",
            "cater", "nacho", "clean",
        ]
    }

    fn sample_solver() -> Solver {
        let mut solver = Solver::new(sample_words()).unwrap();
        solver
            .add_excluded_char('s')
            .add_excluded_char('g')
            .add_negative_char_pos('r', 0)
            .add_negative_char_pos('a', 0);
        solver.add_positive_char_pos('e', 4).unwrap();
        solver
    }

    #[test]
    fn new_rejects_empty_list() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            Solver::new(empty),
            Err(SolverError::InvalidWordList(WordListError::Empty))
        ));
    }

    #[test]
    fn new_rejects_mixed_lengths() {
        assert!(matches!(
            Solver::new(["crane", "crates"]),
            Err(SolverError::InvalidWordList(
                WordListError::InconsistentLength { index: 1, .. }
            ))
        ));
    }

    #[test]
    fn new_derives_word_length() {
        let solver = Solver::new(["bear", "bead"]).unwrap();
        assert_eq!(solver.word_length(), 4);
    }

    #[test]
    fn no_clues_returns_sorted_list() {
        let solver = Solver::new(SCENARIO).unwrap();
        assert_eq!(
            solver.possible_answers(),
            vec!["crane", "crate", "grape", "trace"]
        );
    }

    #[test]
    fn scenario_pinned_and_excluded() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver
            .add_positive_char_pos('c', 0)
            .unwrap()
            .add_excluded_char('g');

        assert_eq!(solver.possible_answers(), vec!["crane", "crate"]);
    }

    #[test]
    fn positive_after_negative_rejected() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_negative_char_pos('a', 0);

        let result = solver.add_positive_char_pos('a', 2);
        assert!(matches!(
            result,
            Err(SolverError::ExistingConstraint { letter: 'a' })
        ));
    }

    #[test]
    fn positive_after_positive_rejected() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_positive_char_pos('c', 0).unwrap();
        assert!(solver.add_positive_char_pos('c', 0).is_err());
    }

    #[test]
    fn rejected_positive_leaves_state_untouched() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_negative_char_pos('a', 0);
        let before = solver.possible_answers();

        let _ = solver.add_positive_char_pos('a', 2);
        assert_eq!(solver.possible_answers(), before);
        assert_eq!(
            solver.constraint_for('a'),
            Some(&LetterConstraint::excluded_at(0))
        );
    }

    #[test]
    fn negative_after_positive_other_position_is_redundant() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_positive_char_pos('c', 0).unwrap();
        let pinned_only = solver.possible_answers();

        solver.add_negative_char_pos('c', 3);
        assert_eq!(solver.possible_answers(), pinned_only);
        assert_eq!(
            solver.constraint_for('c'),
            Some(&LetterConstraint::PinnedAt(0))
        );
    }

    #[test]
    fn negative_after_positive_same_position_empties_result() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver
            .add_positive_char_pos('c', 0)
            .unwrap()
            .add_negative_char_pos('c', 0);

        assert!(solver.possible_answers().is_empty());
    }

    #[test]
    fn duplicate_excluded_chars_are_harmless() {
        let mut once = Solver::new(SCENARIO).unwrap();
        once.add_excluded_char('g');
        let mut twice = Solver::new(SCENARIO).unwrap();
        twice.add_excluded_char('g').add_excluded_char('g');

        assert_eq!(once.possible_answers(), twice.possible_answers());
    }

    #[test]
    fn out_of_range_negative_position_is_harmless() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_negative_char_pos('c', 9);
        // Only the presence requirement applies
        assert_eq!(
            solver.possible_answers(),
            vec!["crane", "crate", "trace"]
        );
    }

    #[test]
    fn out_of_range_pinned_position_empties_result() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_positive_char_pos('c', 9).unwrap();
        assert!(solver.possible_answers().is_empty());
    }

    #[test]
    fn possible_answers_is_idempotent() {
        let solver = sample_solver();
        assert_eq!(solver.possible_answers(), solver.possible_answers());
    }

    #[test]
    fn possible_answers_satisfy_every_clue() {
        let solver = sample_solver();
        let answers = solver.possible_answers();
        assert!(!answers.is_empty());

        let all = sample_words();
        for word in &answers {
            // No synthesized words
            assert!(all.iter().any(|w| *w == word.as_str()));

            for excluded in solver.excluded_chars() {
                assert!(!word.contains(*excluded), "{word} contains {excluded}");
            }

            for clue in solver.clues() {
                match clue {
                    Clue::Absent { .. } => {}
                    Clue::Misplaced { letter, position } | Clue::Pinned { letter, position } => {
                        assert!(word.contains(letter), "{word} lacks {letter}");
                        if let Clue::Misplaced { .. } = clue {
                            assert_ne!(word.chars().nth(position), Some(letter));
                        }
                    }
                }
            }

            assert_eq!(word.chars().nth(4), Some('e'));
            assert_eq!(word.matches('e').count(), 1);
        }
    }

    #[test]
    fn possible_answers_sorted() {
        let solver = Solver::new(sample_words()).unwrap();
        let answers = solver.possible_answers();
        assert!(answers.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(answers.len(), sample_words().len());
    }

    #[test]
    fn possible_answers_collate_case_and_accents() {
        let solver = Solver::new(["apple", "Apple", "cafez", "cafés"]).unwrap();
        assert_eq!(
            solver.possible_answers(),
            vec!["apple", "Apple", "cafés", "cafez"]
        );
    }

    #[test]
    fn possible_answers_respect_multiple_excluded_positions() {
        let mut solver = Solver::new(sample_words()).unwrap();
        solver
            .add_excluded_char('n')
            .add_negative_char_pos('r', 0)
            .add_negative_char_pos('r', 3)
            .add_negative_char_pos('r', 4)
            .add_negative_char_pos('a', 0)
            .add_negative_char_pos('a', 3)
            .add_positive_char_pos('e', 4)
            .unwrap();

        assert_eq!(
            solver.constraint_for('r').map(|c| c.forbidden_positions(5)),
            Some(vec![0, 3, 4])
        );

        let answers = solver.possible_answers();
        assert_eq!(
            answers,
            vec!["crate", "grape", "grate", "irate", "trace"]
        );

        let all = sample_words();
        for word in &answers {
            assert!(all.iter().any(|w| *w == word.as_str()));
            assert!(!word.contains('n'), "{word} contains n");

            for letter in ['r', 'a', 'e'] {
                assert!(word.contains(letter), "{word} lacks {letter}");
                let constraint = solver.constraint_for(letter).unwrap();
                for position in constraint.forbidden_positions(5) {
                    assert_ne!(
                        word.chars().nth(position),
                        Some(letter),
                        "{word} has {letter} at {position}"
                    );
                }
            }
        }
    }

    #[test]
    fn sample_solver_expected_answers() {
        // no 's' or 'g', 'r' and 'a' present but not at 0, 'e' only at 4
        assert_eq!(
            sample_solver().possible_answers(),
            vec!["crane", "crate", "irate", "trace"]
        );
    }

    #[test]
    fn apply_dispatches_each_clue_kind() {
        let mut via_apply = Solver::new(SCENARIO).unwrap();
        via_apply
            .apply_all([
                Clue::Pinned {
                    letter: 'c',
                    position: 0,
                },
                Clue::Absent { letter: 'g' },
                Clue::Misplaced {
                    letter: 'e',
                    position: 0,
                },
            ])
            .unwrap();

        let mut direct = Solver::new(SCENARIO).unwrap();
        direct
            .add_positive_char_pos('c', 0)
            .unwrap()
            .add_excluded_char('g')
            .add_negative_char_pos('e', 0);

        assert_eq!(via_apply.possible_answers(), direct.possible_answers());
    }

    #[test]
    fn apply_all_stops_at_conflict() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        let result = solver.apply_all([
            Clue::Misplaced {
                letter: 'r',
                position: 0,
            },
            Clue::Pinned {
                letter: 'r',
                position: 1,
            },
            Clue::Absent { letter: 'g' },
        ]);

        assert!(matches!(
            result,
            Err(SolverError::ExistingConstraint { letter: 'r' })
        ));
        assert!(solver.excluded_chars().is_empty());
    }

    #[test]
    fn clues_round_trip_through_fresh_solver() {
        let solver = sample_solver();
        let mut rebuilt = Solver::new(sample_words()).unwrap();
        rebuilt.apply_all(solver.clues()).unwrap();

        assert_eq!(rebuilt.clues(), solver.clues());
        assert_eq!(rebuilt.possible_answers(), solver.possible_answers());
    }

    #[test]
    fn clues_canonical_order() {
        let clues: Vec<String> = sample_solver()
            .clues()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(clues, vec!["-g", "-s", "a~0", "e@4", "r~0"]);
    }

    #[test]
    fn explain_reports_first_failing_stage() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver
            .add_positive_char_pos('c', 0)
            .unwrap()
            .add_excluded_char('g')
            .add_negative_char_pos('n', 0);

        assert_eq!(solver.explain("crane"), Verdict::Candidate);
        assert_eq!(
            solver.explain("grape"),
            Verdict::ContainsExcluded { letter: 'g' }
        );
        assert_eq!(
            solver.explain("crate"),
            Verdict::MissingLetter { letter: 'n' }
        );
        assert_eq!(solver.explain("zebra"), Verdict::NotInList);
    }

    #[test]
    fn explain_forbidden_position() {
        let mut solver = Solver::new(SCENARIO).unwrap();
        solver.add_positive_char_pos('c', 0).unwrap();

        assert_eq!(
            solver.explain("trace"),
            Verdict::ForbiddenPosition {
                letter: 'c',
                position: 3
            }
        );
    }

    #[test]
    fn explain_agrees_with_possible_answers() {
        let solver = sample_solver();
        let answers = solver.possible_answers();
        for word in sample_words() {
            assert_eq!(
                solver.explain(word).is_candidate(),
                answers.iter().any(|a| a == word),
                "disagreement on {word}"
            );
        }
    }
}
