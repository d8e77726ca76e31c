//! Word ladder result path

use super::dictionary::Dictionary;
use super::word::is_adjacent;
use std::fmt;

/// An ordered sequence of words from start to goal
///
/// Produced by the search; consecutive rungs differ by one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    rungs: Vec<String>,
}

impl Ladder {
    /// Wrap an ordered path of words
    #[must_use]
    pub const fn new(rungs: Vec<String>) -> Self {
        Self { rungs }
    }

    /// The words from start to goal inclusive
    #[inline]
    #[must_use]
    pub fn rungs(&self) -> &[String] {
        &self.rungs
    }

    /// Consume the ladder, yielding its words
    #[must_use]
    pub fn into_rungs(self) -> Vec<String> {
        self.rungs
    }

    /// Number of words in the ladder, including start and goal
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Number of substitutions (one less than the word count)
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.rungs.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.rungs.first().map(String::as_str)
    }

    #[must_use]
    pub fn goal(&self) -> Option<&str> {
        self.rungs.last().map(String::as_str)
    }

    /// Check that every rung is a dictionary word and each step changes one letter
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Ladder;
    /// use word_ladder::wordlists::loader::dictionary_from_slice;
    ///
    /// let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog"]);
    /// let ladder = Ladder::new(vec!["cat".into(), "cot".into(), "cog".into(), "dog".into()]);
    /// assert!(ladder.is_valid(&dict));
    /// ```
    #[must_use]
    pub fn is_valid(&self, dictionary: &Dictionary) -> bool {
        !self.rungs.is_empty()
            && self.rungs.iter().all(|w| dictionary.contains(w))
            && self.rungs.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rungs.join(" -> "))
    }
}
