//! Word ladder word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Every word in a
//! ladder shares the same length, so adjacency is a per-position comparison.

use std::fmt;
use thiserror::Error;

/// First letter of the mutation alphabet
pub const ALPHABET_START: u8 = b'a';

/// Last letter of the mutation alphabet
pub const ALPHABET_END: u8 = b'z';

/// A lowercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether two words are one substitution apart
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cat = Word::new("cat").unwrap();
    /// assert!(cat.is_adjacent(&Word::new("cot").unwrap()));
    /// assert!(!cat.is_adjacent(&Word::new("dog").unwrap()));
    /// assert!(!cat.is_adjacent(&cat));
    /// ```
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        is_adjacent(&self.text, &other.text)
    }

    /// Position of the single differing letter, if the words are adjacent
    #[must_use]
    pub fn changed_position(&self, other: &Self) -> Option<usize> {
        changed_position(&self.text, &other.text)
    }
}

/// Check whether two strings have equal length and differ in exactly one byte
#[must_use]
pub fn is_adjacent(a: &str, b: &str) -> bool {
    changed_position(a, b).is_some()
}

/// Index of the only differing byte between two equal-length strings
///
/// Returns `None` when lengths differ, the strings are equal, or they
/// differ in more than one position.
#[must_use]
pub fn changed_position(a: &str, b: &str) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }

    let mut diffs = a
        .bytes()
        .zip(b.bytes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i);

    match (diffs.next(), diffs.next()) {
        (Some(i), None) => Some(i),
        _ => None,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
