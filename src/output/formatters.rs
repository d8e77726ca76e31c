//! Formatting utilities for terminal output

use crate::core::{Ladder, changed_position};
use crate::solver::SearchOutcome;

/// One-line summary of a search outcome
#[must_use]
pub fn format_outcome(start: &str, goal: &str, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(ladder) => format!("Optimal path = {ladder}"),
        SearchOutcome::NoPath => format!("No path exists from {start} to {goal}."),
        SearchOutcome::Aborted { expansions } => {
            format!("Search from {start} to {goal} stopped after {expansions} expansions.")
        }
    }
}

/// Rungs with the letter changed at each step shown in uppercase
///
/// The first rung is returned unchanged.
#[must_use]
pub fn highlight_changes(ladder: &Ladder) -> Vec<String> {
    let rungs = ladder.rungs();
    let mut out = Vec::with_capacity(rungs.len());

    if let Some(first) = rungs.first() {
        out.push(first.clone());
    }

    for pair in rungs.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let rung = match changed_position(prev, next) {
            Some(position) => next
                .char_indices()
                .map(|(i, c)| if i == position { c.to_ascii_uppercase() } else { c })
                .collect(),
            None => next.clone(),
        };
        out.push(rung);
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 step" / "3 steps"
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
