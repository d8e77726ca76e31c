//! Neighbor analysis command
//!
//! Lists the dictionary words one substitution away from a given word.

use crate::core::{Dictionary, Word, changed_position};
use crate::solver::QueryError;

/// Result of analyzing a word's neighborhood
pub struct NeighborsResult {
    pub word: String,
    /// Neighbors in search generation order
    pub neighbors: Vec<String>,
    /// Neighbors grouped by the position that changes
    pub by_position: Vec<Vec<String>>,
    /// Dictionary words sharing the word's length
    pub same_length: usize,
}

impl NeighborsResult {
    /// Number of edges leaving this word
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Find every dictionary word adjacent to `word`
///
/// # Errors
///
/// Returns an error if:
/// - The word is malformed
/// - The word is not in the dictionary
pub fn find_neighbors(word: &str, dictionary: &Dictionary) -> Result<NeighborsResult, QueryError> {
    let word = Word::new(word).map_err(|source| QueryError::InvalidWord {
        word: word.to_string(),
        source,
    })?;

    if !dictionary.contains(word.text()) {
        return Err(QueryError::NotInDictionary(word.text().to_string()));
    }

    let neighbors = dictionary.neighbors_of(word.text());

    let mut by_position: Vec<Vec<String>> = vec![Vec::new(); word.len()];
    for neighbor in &neighbors {
        if let Some(position) = changed_position(word.text(), neighbor) {
            by_position[position].push(neighbor.clone());
        }
    }

    Ok(NeighborsResult {
        same_length: dictionary.words_of_length(word.len()).len(),
        word: word.text().to_string(),
        neighbors,
        by_position,
    })
}
