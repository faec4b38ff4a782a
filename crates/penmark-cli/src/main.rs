//! Penmark terminal front end.
//!
//! Loads a puzzle from a catalog file or the command line, then drives a
//! session through a line-oriented REPL. Solved puzzles are appended to a
//! JSON record file when one is configured.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use penmark_board::PuzzleId;
use penmark_session::{Catalog, Difficulty, Session, SolvedRecord, SolvedSink};

mod repl;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Expert => Self::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON puzzle catalog mapping difficulty tiers to puzzle entries.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Difficulty tier to pick from the catalog.
    #[arg(long, value_name = "TIER", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Load this 81-character board instead of the catalog.
    #[arg(long, value_name = "BOARD")]
    puzzle: Option<String>,

    /// Solution string for `--puzzle`.
    #[arg(long, value_name = "SOLUTION", requires = "puzzle")]
    solution: Option<String>,

    /// Where solved puzzle ids are persisted as JSON.
    #[arg(long, value_name = "PATH")]
    solved: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("i/o error: {_0}")]
    Io(io::Error),
    #[display("bad catalog: {_0}")]
    Catalog(serde_json::Error),
    #[display("no unsolved {difficulty} puzzles left in the catalog")]
    CatalogExhausted { difficulty: Difficulty },
}

/// Records solved puzzles and flushes the record to disk.
struct PersistentSink {
    difficulty: Difficulty,
    record: SolvedRecord,
    path: Option<PathBuf>,
}

impl PersistentSink {
    fn load(difficulty: Difficulty, path: Option<PathBuf>) -> Result<Self, CliError> {
        let record = match &path {
            Some(path) if path.exists() => serde_json::from_str(&fs::read_to_string(path)?)?,
            _ => SolvedRecord::default(),
        };
        Ok(Self {
            difficulty,
            record,
            path,
        })
    }
}

impl SolvedSink for PersistentSink {
    fn mark_solved(&mut self, id: &PuzzleId) {
        self.record.mark_solved(self.difficulty, &id.to_string());
        let Some(path) = &self.path else {
            return;
        };
        let result = serde_json::to_string_pretty(&self.record)
            .map_err(io::Error::other)
            .and_then(|json| fs::write(path, json));
        if let Err(err) = result {
            log::error!("failed to persist solved record to {}: {err}", path.display());
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("penmark: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let difficulty = Difficulty::from(args.difficulty);
    let mut sink = PersistentSink::load(difficulty, args.solved)?;

    let mut session = Session::default();
    if let Some(board) = &args.puzzle {
        session.load_puzzle_str(board, args.solution.as_deref(), None);
    } else if let Some(path) = &args.catalog {
        let catalog: Catalog = serde_json::from_str(&fs::read_to_string(path)?)?;
        let entry = catalog
            .first_unsolved(difficulty, &sink.record)
            .ok_or(CliError::CatalogExhausted { difficulty })?;
        session.load_puzzle_str(&entry.puzzle, entry.solution.as_deref(), Some(&entry.id));
    }

    repl::run(&mut session, &mut sink)?;
    Ok(())
}
