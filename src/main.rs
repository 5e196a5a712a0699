//! Hangman Solver - CLI
//!
//! Plays hangman against every word of a target list (or a single word),
//! armed only with a reference dictionary, and reports how well it did.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{run_batch, solve_word},
    output::{print_batch_report, print_solve_result},
    solver::Solver,
    wordlists::{Corpus, loader},
};
use std::path::{Path, PathBuf};

const DEFAULT_TARGETS: &str = "cuvinte_de_verificat.txt";

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Automatic hangman player for Romanian word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file: one entry per line, optional leading '>'/'<' markers
    #[arg(short, long, global = true, default_value = "dex.txt")]
    dictionary: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every word in a target list and report statistics (default)
    Batch {
        /// Target list: plain words or 'field1;field2;field3' lines
        #[arg(short, long, default_value = DEFAULT_TARGETS)]
        targets: PathBuf,

        /// Only solve the first N targets
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Solve a single word and print the guess trace
    Solve {
        /// The word to solve
        word: String,

        /// Show candidate counts per guess
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = loader::load_dictionary(&cli.dictionary)
        .with_context(|| format!("failed to read dictionary '{}'", cli.dictionary.display()))?;
    if dictionary.is_empty() {
        bail!(
            "dictionary '{}' contains no usable words",
            cli.dictionary.display()
        );
    }
    let mut corpus = Corpus::new(dictionary);

    // The original tool's one job: run the whole target list.
    let command = cli.command.unwrap_or(Commands::Batch {
        targets: PathBuf::from(DEFAULT_TARGETS),
        limit: None,
    });

    match command {
        Commands::Batch { targets, limit } => run_batch_command(&mut corpus, &targets, limit),
        Commands::Solve { word, verbose } => run_solve_command(&mut corpus, &word, verbose),
    }
}

fn run_batch_command(corpus: &mut Corpus, targets_path: &Path, limit: Option<usize>) -> Result<()> {
    let mut targets = loader::load_targets(targets_path)
        .with_context(|| format!("failed to read target list '{}'", targets_path.display()))?;
    if targets.is_empty() {
        bail!(
            "target list '{}' contains no usable words",
            targets_path.display()
        );
    }
    if let Some(limit) = limit {
        targets.truncate(limit);
    }

    // Guarantee every target is findable before any solving starts.
    corpus.augment(targets.iter().cloned());

    println!("Dictionary: {} words", corpus.len());
    println!("Solving {} target words...", targets.len());

    let solver = Solver::new(corpus.words());
    let report = run_batch(&solver, &targets);
    print_batch_report(&report);

    Ok(())
}

fn run_solve_command(corpus: &mut Corpus, word: &str, verbose: bool) -> Result<()> {
    let result = solve_word(corpus, word)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("cannot solve '{word}'"))?;

    print_solve_result(&result, verbose);
    Ok(())
}
