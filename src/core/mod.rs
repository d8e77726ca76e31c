//! Core domain types for word ladders
//!
//! This module contains the fundamental value types: words, the dictionary
//! they are checked against, and the ladder paths the search produces.

mod dictionary;
mod ladder;
mod word;

pub use dictionary::{Dictionary, for_each_mutation};
pub use ladder::Ladder;
pub use word::{ALPHABET_END, ALPHABET_START, Word, WordError, changed_position, is_adjacent};
