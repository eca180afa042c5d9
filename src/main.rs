//! Spelling Bee Hints - CLI
//!
//! Progressive hints for the daily puzzle: compares your found words with
//! the full answer list and meters out only as much help as you ask for.

use anyhow::{Context, Result, ensure};
use bee_hints::{
    commands::{compute_progress, run_reveal, run_session},
    core::WordList,
    output::print_progress,
    sources::{load_word_list, resolve_answer_file},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bee_hints",
    about = "Progressive hints for the daily spelling bee",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Your found words, one per line
    #[arg(short, long, global = true, default_value = "found.txt")]
    found: PathBuf,

    /// Answer list file (skips the cache lookup)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Directory of cached daily answer lists, one <date>.txt per day
    #[arg(short, long, global = true, default_value = "answers")]
    cache_dir: PathBuf,

    /// Puzzle date to load from the cache (YYYY-MM-DD); newest if omitted
    #[arg(short, long, global = true)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive hints, one at a time (default)
    Session,

    /// Print every hint without pausing
    Reveal,

    /// Show how far along today's puzzle is
    Progress,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (found, answers) = load_lists(&cli)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(&found, &answers).map_err(|e| anyhow::anyhow!(e)),
        Commands::Reveal => {
            run_reveal(&found, &answers);
            Ok(())
        }
        Commands::Progress => run_progress_command(&found, &answers),
    }
}

/// Load the found and answer lists according to the CLI flags
///
/// Returns (`found`, `answers`), both normalized. A missing or empty answer
/// list is fatal here; the hint engine itself never reads files.
fn load_lists(cli: &Cli) -> Result<(WordList, WordList)> {
    let answer_path = resolve_answer_file(
        cli.answers.as_deref(),
        &cli.cache_dir,
        cli.date.as_deref(),
    )
    .context("choosing an answer list")?;

    let answers = load_word_list(&answer_path)
        .with_context(|| format!("reading answer list {}", answer_path.display()))?;
    ensure!(
        !answers.is_empty(),
        "answer list {} is empty",
        answer_path.display()
    );

    let found = load_word_list(&cli.found)
        .with_context(|| format!("reading found words {}", cli.found.display()))?;

    Ok((found, answers))
}

fn run_progress_command(found: &WordList, answers: &WordList) -> Result<()> {
    let summary = compute_progress(found, answers).map_err(|e| anyhow::anyhow!(e))?;
    print_progress(&summary);
    Ok(())
}
