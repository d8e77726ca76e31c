//! Word ladder search
//!
//! Breadth-first search over single-letter mutations, the ladder tree used to
//! rebuild paths, and validation of start/goal queries.

mod engine;
mod query;
mod tree;

pub use engine::{
    LadderSearch, SearchConfig, SearchOutcome, SearchReport, SearchStats, find_ladder,
};
pub use query::{LadderQuery, QueryError, validate_query};
pub use tree::{LadderNode, LadderTree, NodeId};
