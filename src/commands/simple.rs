//! Simple interactive CLI mode
//!
//! Line-based prompt for solving ladders without the TUI

use super::solve::{SolveConfig, solve_ladder};
use crate::core::Dictionary;
use crate::output::formatters::{format_outcome, highlight_changes};
use crate::solver::SearchOutcome;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(dictionary: &Dictionary) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(dictionary, stdin.lock(), stdout.lock())
}

/// Run the prompt loop over arbitrary input and output streams
///
/// Each line holds a start and goal word. `quit`, `exit`, `q` or end of
/// input stops the loop.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║              Word Ladder - Interactive Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Dictionary: {} words", dictionary.len())?;
    writeln!(output, "Enter a start and goal word separated by a space.")?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    let mut line = String::new();
    loop {
        write!(output, "Words: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit" | "exit" | "q"] => break,
            [start, goal] => {
                let config = SolveConfig::new((*start).to_string(), (*goal).to_string());
                match solve_ladder(config, dictionary) {
                    Ok(result) => {
                        writeln!(
                            output,
                            "{}",
                            format_outcome(&result.start, &result.goal, &result.outcome)
                        )?;
                        if let SearchOutcome::Found(ladder) = &result.outcome {
                            for (i, rung) in highlight_changes(ladder).iter().enumerate() {
                                writeln!(output, "  {i:>2}. {rung}")?;
                            }
                        }
                        writeln!(output, "  ({} expansions)\n", result.stats.expansions)?;
                    }
                    Err(err) => writeln!(output, "❌ {err}\n")?,
                }
            }
            _ => writeln!(output, "❌ Enter exactly two words, e.g. 'cold warm'\n")?,
        }
    }

    writeln!(output, "👋 Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::dictionary_from_slice;

    fn run(input: &str) -> String {
        let dict = dictionary_from_slice(&["cat", "cot", "cog", "dog", "zen"]);
        let mut output = Vec::new();
        run_simple_with(&dict, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn solves_each_line() {
        let out = run("cat dog\nquit\n");

        assert!(out.contains("Optimal path = cat -> cot -> cog -> dog"));
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn reports_missing_path() {
        let out = run("cat zen\n");
        assert!(out.contains("No path exists from cat to zen."));
    }

    #[test]
    fn reports_query_errors() {
        let out = run("cat cow\n");
        assert!(out.contains("The word cow does not exist in this dictionary."));
    }

    #[test]
    fn rejects_wrong_word_count() {
        let out = run("cat\n");
        assert!(out.contains("Enter exactly two words"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let out = run("");
        assert!(out.contains("Goodbye"));
    }
}
