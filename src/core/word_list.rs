//! Fixed-length candidate word list
//!
//! The word length is taken from the first entry and every later entry must match it.

use std::fmt;

/// An ordered, non-empty list of equal-length candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    word_length: usize,
}

/// Error type for word lists that cannot back a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    InconsistentLength {
        index: usize,
        word: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list must contain at least one word"),
            Self::InconsistentLength {
                index,
                word,
                expected,
                found,
            } => write!(
                f,
                "Word '{word}' at index {index} has {found} letters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for WordListError {}

impl WordList {
    /// Create a word list, deriving the word length from the first entry
    ///
    /// # Errors
    /// Returns `WordListError` if:
    /// - The list is empty
    /// - Any word's length differs from the first word's length
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::WordList;
    ///
    /// let list = WordList::new(["crane", "slate"]).unwrap();
    /// assert_eq!(list.word_length(), 5);
    ///
    /// assert!(WordList::new(Vec::<String>::new()).is_err());
    /// assert!(WordList::new(["crane", "cat"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let word_length = words
            .first()
            .map(|w| w.chars().count())
            .ok_or(WordListError::Empty)?;

        for (index, word) in words.iter().enumerate().skip(1) {
            let found = word.chars().count();
            if found != word_length {
                return Err(WordListError::InconsistentLength {
                    index,
                    word: word.clone(),
                    expected: word_length,
                    found,
                });
            }
        }

        Ok(Self { words, word_length })
    }

    /// Number of characters in every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether the list contains `word` exactly
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
