//! Dictionary of valid words
//!
//! The dictionary is a plain membership set. It may hold words of mixed
//! lengths; a search only ever probes words of its own length.

use super::word::{ALPHABET_END, ALPHABET_START, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Set of valid lowercase words with O(1) membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from validated words
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        words.into_iter().collect()
    }

    /// Insert a word, returning whether it was newly added
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word.text().to_string())
    }

    /// Check whether a word is present
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words of the given length, sorted
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().filter(|w| w.len() == len).collect();
        words.sort_unstable();
        words
    }

    /// Histogram of word lengths, sorted by length
    #[must_use]
    pub fn lengths(&self) -> Vec<(usize, usize)> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for word in &self.words {
            *counts.entry(word.len()).or_insert(0) += 1;
        }

        let mut lengths: Vec<(usize, usize)> = counts.into_iter().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Dictionary words one substitution away from `word`
    ///
    /// Results come out in position-major, letter-major order, which is the
    /// same order the ladder search discovers successors in.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::wordlists::loader::dictionary_from_slice;
    ///
    /// let dict = dictionary_from_slice(&["cat", "bat", "cot", "cab", "dog"]);
    /// assert_eq!(dict.neighbors_of("cat"), vec!["bat", "cot", "cab"]);
    /// ```
    #[must_use]
    pub fn neighbors_of(&self, word: &str) -> Vec<String> {
        let mut neighbors = Vec::new();
        for_each_mutation(word, |candidate| {
            if candidate != word && self.contains(candidate) {
                neighbors.push(candidate.to_string());
            }
        });
        neighbors
    }
}

/// Visit every single-letter mutation of `word` in generation order
///
/// For each position, letters run `a` through `z`, including the word's
/// own letter at that position. Non-ASCII input yields nothing.
pub fn for_each_mutation<F>(word: &str, mut visit: F)
where
    F: FnMut(&str),
{
    if !word.is_ascii() {
        return;
    }

    let mut mutated = word.to_string();
    let mut buf = [0u8; 4];

    for position in 0..word.len() {
        for letter in ALPHABET_START..=ALPHABET_END {
            mutated.replace_range(position..=position, char::from(letter).encode_utf8(&mut buf));
            visit(&mutated);
        }
        // Restore before moving to the next position
        mutated.replace_range(position..=position, &word[position..=position]);
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

impl Extend<Word> for Dictionary {
    fn extend<T: IntoIterator<Item = Word>>(&mut self, iter: T) {
        self.words
            .extend(iter.into_iter().map(|w| w.text().to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn membership() {
        let d = dict(&["cat", "cot", "dog"]);
        assert!(d.contains("cat"));
        assert!(d.contains("dog"));
        assert!(!d.contains("cog"));
        assert_eq!(d.len(), 3);
        assert!(!d.is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let d = dict(&["cat", "CAT", "cat"]);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut d = Dictionary::new();
        assert!(d.is_empty());
        assert!(d.insert(Word::new("cat").unwrap()));
        assert!(!d.insert(Word::new("cat").unwrap()));
    }

    #[test]
    fn words_of_length_filters_and_sorts() {
        let d = dict(&["cold", "cat", "warm", "bat", "a"]);
        assert_eq!(d.words_of_length(3), vec!["bat", "cat"]);
        assert_eq!(d.words_of_length(4), vec!["cold", "warm"]);
        assert!(d.words_of_length(5).is_empty());
    }

    #[test]
    fn lengths_histogram() {
        let d = dict(&["cold", "cat", "warm", "bat", "dog"]);
        assert_eq!(d.lengths(), vec![(3, 3), (4, 2)]);
    }

    #[test]
    fn neighbors_in_generation_order() {
        let d = dict(&["cab", "cot", "bat", "cat", "hat", "dog", "cats"]);
        assert_eq!(d.neighbors_of("cat"), vec!["bat", "hat", "cot", "cab"]);
    }

    #[test]
    fn neighbors_excludes_self() {
        let d = dict(&["cat"]);
        assert!(d.neighbors_of("cat").is_empty());
    }

    #[test]
    fn mutation_count_and_order() {
        let mut seen = Vec::new();
        for_each_mutation("ab", |m| seen.push(m.to_string()));

        assert_eq!(seen.len(), 52);
        assert_eq!(seen[0], "ab");
        assert_eq!(seen[1], "bb");
        assert_eq!(seen[25], "zb");
        // Second position starts from the original first letter
        assert_eq!(seen[26], "aa");
        assert_eq!(seen[51], "az");
    }

    #[test]
    fn mutation_of_non_ascii_is_empty() {
        let mut count = 0;
        for_each_mutation("café", |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn extend_adds_words() {
        let mut d = dict(&["cat"]);
        d.extend(vec![Word::new("dog").unwrap()]);
        assert_eq!(d.len(), 2);
    }
}
