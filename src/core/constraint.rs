//! Per-letter positional constraints
//!
//! Every letter with a constraint is known to be in the solution. The variant
//! says which positions it is forbidden from:
//! - `ExcludedAt(s)`: present, but not at any index in `s`
//! - `PinnedAt(p)`: present at `p`, so forbidden at every other index

use std::collections::BTreeSet;

/// Positional knowledge about a letter that is in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterConstraint {
    /// Letter is present but not at any of these positions
    ExcludedAt(BTreeSet<usize>),
    /// Letter is present at exactly this position
    PinnedAt(usize),
}

impl LetterConstraint {
    /// Constraint for a letter seen once at a wrong position
    #[must_use]
    pub fn excluded_at(position: usize) -> Self {
        Self::ExcludedAt(BTreeSet::from([position]))
    }

    /// Check whether the letter may not appear at `position`
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::LetterConstraint;
    ///
    /// let pinned = LetterConstraint::PinnedAt(0);
    /// assert!(!pinned.forbids(0, 5));
    /// assert!(pinned.forbids(3, 5));
    /// ```
    #[must_use]
    pub fn forbids(&self, position: usize, word_length: usize) -> bool {
        match self {
            Self::ExcludedAt(positions) => positions.contains(&position),
            Self::PinnedAt(pinned) => position != *pinned && position < word_length,
        }
    }

    /// All positions the letter is forbidden from, ascending
    #[must_use]
    pub fn forbidden_positions(&self, word_length: usize) -> Vec<usize> {
        match self {
            Self::ExcludedAt(positions) => positions.iter().copied().collect(),
            Self::PinnedAt(pinned) => (0..word_length).filter(|i| i != pinned).collect(),
        }
    }

    /// Record one more wrong position for the letter
    ///
    /// A pinned letter ignores positions it is already forbidden from. Excluding
    /// the pinned position itself leaves the letter forbidden everywhere.
    pub fn exclude(&mut self, position: usize, word_length: usize) {
        if let Self::ExcludedAt(positions) = self {
            positions.insert(position);
            return;
        }

        if *self == Self::PinnedAt(position) {
            *self = Self::ExcludedAt(
                (0..word_length)
                    .chain(std::iter::once(position))
                    .collect(),
            );
        }
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        matches!(self, Self::PinnedAt(_))
    }
}
