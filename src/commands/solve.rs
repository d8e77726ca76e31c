//! Ladder solving command
//!
//! Validates a start/goal pair and runs the search.

use crate::core::Dictionary;
use crate::solver::{
    LadderSearch, QueryError, SearchConfig, SearchOutcome, SearchStats, validate_query,
};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub goal: String,
    pub max_expansions: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, goal: String) -> Self {
        Self {
            start,
            goal,
            max_expansions: None,
        }
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub goal: String,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_found()
    }
}

/// Solve a ladder from `config.start` to `config.goal`
///
/// # Errors
///
/// Returns a `QueryError` if:
/// - The dictionary is empty
/// - Either word is malformed or missing from the dictionary
/// - The words differ in length
pub fn solve_ladder(
    config: SolveConfig,
    dictionary: &Dictionary,
) -> Result<SolveResult, QueryError> {
    let query = validate_query(&config.start, &config.goal, dictionary)?;

    let search_config = SearchConfig {
        max_expansions: config.max_expansions,
    };

    let started = Instant::now();
    let report = LadderSearch::new(query.start.text(), query.goal.text(), dictionary)
        .with_config(search_config)
        .run();
    let duration = started.elapsed();

    Ok(SolveResult {
        start: query.start.text().to_string(),
        goal: query.goal.text().to_string(),
        outcome: report.outcome,
        stats: report.stats,
        duration,
    })
}
