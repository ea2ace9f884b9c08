//! Hangman target word representation
//!
//! A Word stores the lowercase target string along with the set of distinct
//! letters it contains, for membership and win checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// The word a player is trying to reveal
///
/// Stores the normalized text and its distinct letters. The text is
/// guaranteed non-empty, ASCII, and lowercase alphabetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is normalized to lowercase before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("monad").unwrap();
    /// assert_eq!(word.text(), "monad");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("m0nad").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: FxHashSet<char> = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Number of letters in the word, counting repeats
    ///
    /// The text is validated ASCII, so byte length equals letter count.
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
