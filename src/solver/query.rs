//! Query validation
//!
//! The search assumes its inputs are sound. These checks run first and turn
//! bad input into a typed error before any search state is built.

use crate::core::{Dictionary, Word, WordError};
use thiserror::Error;

/// Reasons a start/goal pair cannot be searched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("The dictionary is empty.")]
    EmptyDictionary,

    #[error("The word {word} is not valid: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("The word {0} does not exist in this dictionary.")]
    NotInDictionary(String),

    #[error("The provided words are not of the same length ({start_len} and {goal_len}).")]
    LengthMismatch { start_len: usize, goal_len: usize },
}

/// A validated start/goal pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderQuery {
    pub start: Word,
    pub goal: Word,
}

impl LadderQuery {
    /// Length shared by start and goal
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.start.len()
    }
}

/// Validate a start/goal pair against a dictionary
///
/// Checks run in this order: empty dictionary, word syntax, start
/// membership, goal membership, then length agreement.
///
/// # Errors
///
/// Returns the first `QueryError` encountered.
///
/// # Examples
/// ```
/// use word_ladder::solver::{QueryError, validate_query};
/// use word_ladder::wordlists::loader::dictionary_from_slice;
///
/// let dict = dictionary_from_slice(&["cat", "dog", "cold"]);
/// assert!(validate_query("cat", "dog", &dict).is_ok());
/// assert!(matches!(
///     validate_query("cat", "cold", &dict),
///     Err(QueryError::LengthMismatch { .. })
/// ));
/// ```
pub fn validate_query(
    start: &str,
    goal: &str,
    dictionary: &Dictionary,
) -> Result<LadderQuery, QueryError> {
    if dictionary.is_empty() {
        return Err(QueryError::EmptyDictionary);
    }

    let start = parse_word(start)?;
    let goal = parse_word(goal)?;

    for word in [&start, &goal] {
        if !dictionary.contains(word.text()) {
            return Err(QueryError::NotInDictionary(word.text().to_string()));
        }
    }

    if start.len() != goal.len() {
        return Err(QueryError::LengthMismatch {
            start_len: start.len(),
            goal_len: goal.len(),
        });
    }

    Ok(LadderQuery { start, goal })
}

fn parse_word(raw: &str) -> Result<Word, QueryError> {
    Word::new(raw).map_err(|source| QueryError::InvalidWord {
        word: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_slice;

    #[test]
    fn valid_query() {
        let dict = dictionary_from_slice(&["cat", "dog"]);
        let query = validate_query("cat", "dog", &dict).unwrap();

        assert_eq!(query.start.text(), "cat");
        assert_eq!(query.goal.text(), "dog");
        assert_eq!(query.word_len(), 3);
    }

    #[test]
    fn query_is_case_insensitive() {
        let dict = dictionary_from_slice(&["cat", "dog"]);
        let query = validate_query("CAT", "Dog", &dict).unwrap();

        assert_eq!(query.start.text(), "cat");
        assert_eq!(query.goal.text(), "dog");
    }

    #[test]
    fn same_start_and_goal_allowed() {
        let dict = dictionary_from_slice(&["cat"]);
        assert!(validate_query("cat", "cat", &dict).is_ok());
    }

    #[test]
    fn empty_dictionary_rejected() {
        let dict = Dictionary::new();
        assert_eq!(
            validate_query("cat", "dog", &dict),
            Err(QueryError::EmptyDictionary)
        );
    }

    #[test]
    fn missing_start_rejected_first() {
        let dict = dictionary_from_slice(&["dog"]);
        assert_eq!(
            validate_query("cat", "cow", &dict),
            Err(QueryError::NotInDictionary("cat".to_string()))
        );
    }

    #[test]
    fn missing_goal_rejected() {
        let dict = dictionary_from_slice(&["cat"]);
        assert_eq!(
            validate_query("cat", "dog", &dict),
            Err(QueryError::NotInDictionary("dog".to_string()))
        );
    }

    #[test]
    fn length_mismatch_rejected() {
        let dict = dictionary_from_slice(&["cat", "cold"]);
        assert_eq!(
            validate_query("cat", "cold", &dict),
            Err(QueryError::LengthMismatch {
                start_len: 3,
                goal_len: 4
            })
        );
    }

    #[test]
    fn invalid_characters_rejected() {
        let dict = dictionary_from_slice(&["cat"]);
        assert!(matches!(
            validate_query("c4t", "cat", &dict),
            Err(QueryError::InvalidWord { .. })
        ));
    }

    #[test]
    fn error_messages_read_naturally() {
        let err = QueryError::NotInDictionary("xyz".to_string());
        assert_eq!(err.to_string(), "The word xyz does not exist in this dictionary.");
    }
}
