//! Word lists for ladder searches
//!
//! Provides an embedded dictionary compiled into the binary, plus loading
//! from user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;
use loader::{DictionaryError, dictionary_from_slice, load_from_file};

/// Dictionary source name that selects the embedded word list
pub const BUILTIN: &str = "builtin";

/// Load a dictionary by source name
///
/// `"builtin"` selects the embedded list; anything else is a file path.
///
/// # Errors
///
/// Returns a `DictionaryError` if the file cannot be read.
pub fn load_dictionary(source: &str) -> Result<Dictionary, DictionaryError> {
    if source == BUILTIN {
        Ok(dictionary_from_slice(WORDS))
    } else {
        load_from_file(source)
    }
}
