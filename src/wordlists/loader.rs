//! Dictionary loading utilities
//!
//! Provides functions to build a dictionary from files or embedded constants.

use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Filename <{}> not found!", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a dictionary from a file
///
/// The file holds one word per line. Words are lowercased and trimmed,
/// reading stops at the first blank line, and lines that are not valid
/// words are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if the file does not exist, or
/// `DictionaryError::Io` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DictionaryError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let dictionary = parse_dictionary(&content);
    info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

/// Parse dictionary text, one word per line
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::parse_dictionary;
///
/// let dict = parse_dictionary("Cat\ndog\n\nignored\n");
/// assert!(dict.contains("cat"));
/// assert!(!dict.contains("ignored"));
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Dictionary {
    let mut dictionary = Dictionary::new();
    let mut skipped = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }

        match Word::new(trimmed) {
            Ok(word) => {
                dictionary.insert(word);
            }
            Err(err) => {
                skipped += 1;
                debug!(entry = trimmed, %err, "skipping dictionary entry");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "dictionary entries skipped");
    }

    dictionary
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::dictionary_from_slice;
/// use word_ladder::wordlists::WORDS;
///
/// let dict = dictionary_from_slice(WORDS);
/// assert_eq!(dict.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_slice_converts_valid_words() {
        let dict = dictionary_from_slice(&["cat", "cot", "dog"]);

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("cot"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn dictionary_from_slice_skips_invalid_words() {
        let dict = dictionary_from_slice(&["cat", "c4t", "", "DOG"]);

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("dog"));
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let dict = dictionary_from_slice(&[]);
        assert!(dict.is_empty());
    }

    #[test]
    fn parse_lowercases_and_trims() {
        let dict = parse_dictionary("CAT\n  Dog \r\ncog\n");

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("cog"));
    }

    #[test]
    fn parse_stops_at_first_blank_line() {
        let dict = parse_dictionary("cat\ncot\n\ncog\ndog\n");

        assert_eq!(dict.len(), 2);
        assert!(!dict.contains("cog"));
        assert!(!dict.contains("dog"));
    }

    #[test]
    fn whitespace_only_line_ends_input() {
        let dict = parse_dictionary("cat\n  cot \n \t \ncog\n");

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        // Surrounding whitespace is trimmed from entries
        assert!(dict.contains("cot"));
        assert!(!dict.contains("cog"));
    }

    #[test]
    fn parse_skips_invalid_lines() {
        let dict = parse_dictionary("cat\nit's\ncot\n");

        assert_eq!(dict.len(), 2);
        assert!(!dict.contains("it's"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_loader_test_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "cat\ncot\ncog\ndog\n").unwrap();

        let dict = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let result = load_from_file("definitely/not/a/real/dictionary.txt");

        assert!(matches!(result, Err(DictionaryError::NotFound { .. })));
    }
}
