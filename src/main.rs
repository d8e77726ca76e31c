//! Word Ladder - CLI
//!
//! Shortest word ladder finder with a classic positional mode, subcommands
//! and an interactive TUI.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};
use colored::Colorize;
use std::ffi::OsString;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, find_neighbors, run_benchmark, run_simple, solve_ladder,
    },
    logging::{DEFAULT_LOG_LEVEL, init_logging},
    output::{
        print_benchmark_result, print_neighbors_result, print_plain_result, print_solve_result,
    },
    wordlists::{BUILTIN, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words, one letter at a time",
    after_help = "Classic form: word_ladder <START> <GOAL> <DICTIONARY>",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level: error, warn (default), info, debug, trace
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

/// `word_ladder <start> <goal> <dictionary>`
#[derive(Parser)]
#[command(name = "word_ladder")]
struct ClassicArgs {
    /// Start word
    start: String,

    /// Goal word
    goal: String,

    /// Dictionary file (one word per line) or 'builtin'
    dictionary: String,

    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

enum Invocation {
    Command(Cli),
    Classic(ClassicArgs),
}

impl Invocation {
    fn log_level(&self) -> &str {
        match self {
            Self::Command(cli) => &cli.log_level,
            Self::Classic(args) => &args.log_level,
        }
    }
}

/// Subcommands win whenever they parse. Otherwise three bare words are the
/// classic form, even when one of them is a subcommand name.
fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let cli_err = match Cli::try_parse_from(&args) {
        Ok(cli) => return Ok(Invocation::Command(cli)),
        Err(err) => err,
    };
    if matches!(cli_err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return Err(cli_err);
    }

    let classic_err = match ClassicArgs::try_parse_from(&args) {
        Ok(classic) => return Ok(Invocation::Classic(classic)),
        Err(err) => err,
    };

    // Report against whichever form the first word points at
    let names_subcommand = args
        .get(1)
        .and_then(|arg| arg.to_str())
        .is_some_and(|arg| Cli::command().find_subcommand(arg).is_some());
    Err(if names_subcommand { cli_err } else { classic_err })
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a ladder with detailed output
    Solve {
        /// Start word
        start: String,

        /// Goal word
        goal: String,

        /// Dictionary: 'builtin' (default) or path to file
        #[arg(short = 'd', long, default_value = BUILTIN)]
        dictionary: String,

        /// Show search counters
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many expansions
        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// List the words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,

        /// Dictionary: 'builtin' (default) or path to file
        #[arg(short = 'd', long, default_value = BUILTIN)]
        dictionary: String,
    },

    /// Benchmark the search on random word pairs
    Benchmark {
        /// Dictionary: 'builtin' (default) or path to file
        #[arg(short = 'd', long, default_value = BUILTIN)]
        dictionary: String,

        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to sample (default: most common length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for reproducible pair sampling
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Simple CLI mode (interactive prompt without TUI)
    Simple {
        /// Dictionary: 'builtin' (default) or path to file
        #[arg(short = 'd', long, default_value = BUILTIN)]
        dictionary: String,
    },

    /// Interactive TUI mode
    Play {
        /// Dictionary: 'builtin' (default) or path to file
        #[arg(short = 'd', long, default_value = BUILTIN)]
        dictionary: String,
    },
}

fn main() -> Result<()> {
    let invocation = parse_invocation(std::env::args_os()).unwrap_or_else(|err| err.exit());
    init_logging(invocation.log_level());

    let cli = match invocation {
        Invocation::Classic(args) => {
            return run_classic_command(args.start, args.goal, &args.dictionary);
        }
        Invocation::Command(cli) => cli,
    };

    match cli.command {
        Some(Commands::Solve {
            start,
            goal,
            dictionary,
            verbose,
            max_expansions,
        }) => run_solve_command(start, goal, &dictionary, verbose, max_expansions),
        Some(Commands::Neighbors { word, dictionary }) => run_neighbors_command(&word, &dictionary),
        Some(Commands::Benchmark {
            dictionary,
            count,
            length,
            seed,
        }) => run_benchmark_command(&dictionary, count, length, seed),
        Some(Commands::Simple { dictionary }) => run_simple_command(&dictionary),
        Some(Commands::Play { dictionary }) => run_play_command(&dictionary),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// `word_ladder <start> <goal> <dictionary>`
///
/// Bad input is reported and the process still exits cleanly.
fn run_classic_command(start: String, goal: String, dictionary: &str) -> Result<()> {
    let dictionary = match load_dictionary(dictionary) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            println!("{err}\nUsage word_ladder <startWord> <endWord> <dictionaryPath>");
            return Ok(());
        }
    };

    match solve_ladder(SolveConfig::new(start, goal), &dictionary) {
        Ok(result) => print_plain_result(&result),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn run_solve_command(
    start: String,
    goal: String,
    dictionary: &str,
    verbose: bool,
    max_expansions: Option<usize>,
) -> Result<()> {
    let dictionary = load_dictionary(dictionary)?;

    let mut config = SolveConfig::new(start, goal);
    config.max_expansions = max_expansions;

    let result = solve_ladder(config, &dictionary)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_neighbors_command(word: &str, dictionary: &str) -> Result<()> {
    let dictionary = load_dictionary(dictionary)?;
    let result = find_neighbors(word, &dictionary)?;
    print_neighbors_result(&result);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &str,
    count: usize,
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let dictionary = load_dictionary(dictionary)?;

    let mut config = BenchmarkConfig::new(count);
    config.word_len = length;
    config.seed = seed;

    println!(
        "{}",
        format!("Running benchmark on {count} random word pairs...").bright_cyan()
    );
    let result = run_benchmark(&dictionary, &config);
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(dictionary: &str) -> Result<()> {
    let dictionary = load_dictionary(dictionary)?;
    run_simple(&dictionary)?;
    Ok(())
}

fn run_play_command(dictionary: &str) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let dictionary = load_dictionary(dictionary)?;
    let app = App::new(&dictionary);
    run_tui(app)
}
