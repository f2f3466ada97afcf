//! Wordle Filter - CLI
//!
//! Lists the words consistent with absent, misplaced and pinned letter clues.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use wordle_filter::{
    commands::{FilterConfig, build_solver, check_word, run_filter},
    core::{Clue, LetterAt, parse_clue_list},
    logging::init_logger,
    output::{print_check_result, print_filter_result},
    solver::Solver,
    wordlists::loader::{self, EMBEDDED},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Constraint-based Wordle word filter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), a .json file of {"word": ...} objects, or a text file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    #[command(flatten)]
    clues: ClueArgs,

    /// Debug logging, plus a clue summary before results
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Clue flags shared by every command
#[derive(Args, Default)]
struct ClueArgs {
    /// Letters known not to be in the word, e.g. "gsx"
    #[arg(short = 'x', long, global = true, value_name = "LETTERS")]
    absent: Option<String>,

    /// Letter in the word but not at this position, e.g. r~1 (repeatable)
    #[arg(short, long, global = true, value_name = "LETTER@POS")]
    misplaced: Vec<LetterAt>,

    /// Letter known to be at this position, e.g. c@0 (repeatable)
    #[arg(short, long, global = true, value_name = "LETTER@POS")]
    pinned: Vec<LetterAt>,

    /// File with one clue per line (-x, r~1, c@0), applied first
    #[arg(short, long = "clues", global = true, value_name = "FILE")]
    clue_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every word consistent with the clues (default)
    Filter {
        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print only the number of matching words
        #[arg(long)]
        count: bool,
    },

    /// Explain whether a single word is still possible
    Check {
        /// Word to check
        word: String,
    },
}

impl ClueArgs {
    /// Collect clues in registration order: clue file, pinned, misplaced, absent
    ///
    /// Pinned clues go before misplaced ones so that a letter can carry both.
    fn collect(&self) -> Result<Vec<Clue>> {
        let mut clues = match &self.clue_file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read clue file {}", path.display()))?;
                parse_clue_list(&text)
                    .with_context(|| format!("Invalid clue file {}", path.display()))?
            }
            None => Vec::new(),
        };

        clues.extend(self.pinned.iter().map(|at| Clue::Pinned {
            letter: at.letter,
            position: at.position,
        }));
        clues.extend(self.misplaced.iter().map(|at| Clue::Misplaced {
            letter: at.letter,
            position: at.position,
        }));
        clues.extend(
            self.absent
                .iter()
                .flat_map(|letters| letters.chars())
                .filter(|c| !c.is_whitespace() && *c != ',')
                .map(|c| Clue::Absent {
                    letter: c.to_ascii_lowercase(),
                }),
        );

        Ok(clues)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let solver = load_solver(&cli.wordlist, &cli.clues)?;

    // Default to Filter mode if no command given
    let command = cli.command.unwrap_or(Commands::Filter {
        limit: None,
        count: false,
    });

    match command {
        Commands::Filter { limit, count } => {
            let config = FilterConfig {
                limit,
                count_only: count,
            };
            print_filter_result(&run_filter(&solver, &config), cli.verbose);
        }
        Commands::Check { word } => print_check_result(&check_word(&solver, &word)),
    }

    Ok(())
}

/// Load the word list named by the -w flag and register the clue flags
fn load_solver(wordlist: &str, clue_args: &ClueArgs) -> Result<Solver> {
    let words =
        loader::load(wordlist).with_context(|| format!("Failed to load word list '{wordlist}'"))?;
    let clues = clue_args.collect()?;

    log::debug!("Registering {} clues", clues.len());
    build_solver(words, clues).context("Failed to apply clues")
}
