//! Display functions for command results

use super::formatters::{create_progress_bar, format_outcome, highlight_changes, pluralize};
use crate::commands::{BenchmarkResult, NeighborsResult, SolveResult};
use crate::solver::SearchOutcome;
use colored::Colorize;

/// Print the bare result line used by the positional CLI form
pub fn print_plain_result(result: &SolveResult) {
    println!(
        "{}",
        format_outcome(&result.start, &result.goal, &result.outcome)
    );
}

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.goal.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        SearchOutcome::Found(ladder) => {
            println!();
            for (i, rung) in highlight_changes(ladder).iter().enumerate() {
                println!("  {:>2}. {}", i, rung.bright_white().bold());
            }
            println!();
            println!(
                "{}",
                format!("✅ Solved in {}!", pluralize(ladder.steps(), "step", "steps"))
                    .green()
                    .bold()
            );
        }
        SearchOutcome::NoPath => {
            println!();
            println!(
                "{}",
                format_outcome(&result.start, &result.goal, &result.outcome)
                    .red()
                    .bold()
            );
        }
        SearchOutcome::Aborted { .. } => {
            println!();
            println!(
                "{}",
                format_outcome(&result.start, &result.goal, &result.outcome)
                    .yellow()
                    .bold()
            );
        }
    }

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Expansions:    {}", result.stats.expansions);
        println!("   Nodes created: {}", result.stats.nodes_created);
        println!("   Max frontier:  {}", result.stats.max_frontier);
        println!("   Stale pops:    {}", result.stats.stale_pops);
        println!("   Depth reached: {}", result.stats.depth_reached);
        println!(
            "   Time taken:    {:.3}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the neighborhood of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔗 {} among {} words of length {}",
        pluralize(result.degree(), "neighbor", "neighbors"),
        result.same_length,
        result.word.len()
    );

    for (position, words) in result.by_position.iter().enumerate() {
        let marker: String = result
            .word
            .char_indices()
            .map(|(i, c)| if i == position { c.to_ascii_uppercase() } else { c })
            .collect();
        if words.is_empty() {
            println!("   {marker}: {}", "-".bright_black());
        } else {
            println!("   {marker}: {}", words.join(" ").green());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Word length:      {}", result.word_len);
    println!("   Pairs searched:   {}", result.total_pairs);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!("   No path:          {}", format!("{}", result.no_path).yellow());
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Shortest:         {}", result.min_length);
    println!("   Longest:          {}", result.max_length);
    println!("   Expansions:       {}", result.total_expansions);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if let Some(ladder) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {ladder}");
    }

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&length, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
