//! Word Ladder
//!
//! Finds a shortest chain of dictionary words from a start word to a goal
//! word, changing one letter at a time, using breadth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::find_ladder;
//! use word_ladder::wordlists::loader::dictionary_from_slice;
//!
//! let dictionary = dictionary_from_slice(&["cat", "cot", "cog", "dog"]);
//! let ladder = find_ladder("cat", "dog", &dictionary).unwrap();
//!
//! assert_eq!(ladder.to_string(), "cat -> cot -> cog -> dog");
//! ```

// Core domain types
pub mod core;

// Search engine and ladder tree
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
