//! Command-line front end for the Flippin puzzle engine.
//!
//! The binary `flippin` parses [`Cli`] and hands it to [`run`], which writes
//! its report to the given writer.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use flippin_core::{BOARD_SIZE, Board, BoardParseError};
use flippin_game::{ImportError, PuzzleCatalog};
use flippin_solver::{Solution, SolverError};

/// Tile-flipping puzzle solver.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `flippin` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether END can be reached from START.
    Check {
        /// Start state (25 digits, 0-2, row-major).
        start: String,
        /// End state.
        end: String,
    },
    /// Print the fewest presses that turn START into END.
    Solve {
        /// Start state (25 digits, 0-2, row-major).
        start: String,
        /// End state.
        end: String,
    },
    /// Validate a custom puzzle file and list the accepted puzzles.
    Import {
        /// JSON file holding a list of `[title, {"start": ..., "end": ...}]` entries.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the state after pressing one tile.
    Toggle {
        /// Board state.
        state: String,
        /// Row of the pressed tile (0-4).
        #[arg(allow_negative_numbers = true)]
        row: i32,
        /// Column of the pressed tile (0-4).
        #[arg(allow_negative_numbers = true)]
        col: i32,
    },
}

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Writing output or reading an input file failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// A board state argument is malformed.
    #[display("invalid board state: {_0}")]
    Board(#[from] BoardParseError),
    /// The solver rejected its input.
    #[display("{_0}")]
    Solver(#[from] SolverError),
    /// The puzzle file could not be parsed.
    #[display("{_0}")]
    Import(#[from] ImportError),
    /// A pressed tile lies outside the board.
    #[display("tile ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
}

/// Runs a command, writing its report to `out`.
///
/// Returns `false` if the command reports an unsolvable puzzle.
///
/// # Errors
///
/// Returns an [`AppError`] if an input is malformed or output cannot be written.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<bool, AppError> {
    match command {
        Command::Check { start, end } => {
            let solvable = flippin_solver::is_puzzle_solvable(start, end);
            writeln!(out, "{}", if solvable { "solvable" } else { "unsolvable" })?;
            Ok(solvable)
        }
        Command::Solve { start, end } => {
            let Some(solution) = flippin_solver::solve_states(start, end)? else {
                writeln!(out, "unsolvable")?;
                return Ok(false);
            };
            write_solution(out, &solution)?;
            Ok(true)
        }
        Command::Import { file } => {
            let json = fs::read_to_string(file)?;
            let mut catalog = PuzzleCatalog::new();
            let builtins = catalog.len();
            let added = catalog.import_json(&json)?;
            log::info!("imported {added} puzzle(s) from {}", file.display());
            writeln!(out, "accepted {added} puzzle(s)")?;
            for puzzle in catalog.iter().skip(builtins) {
                writeln!(out, "{}: {} -> {}", puzzle.title(), puzzle.start(), puzzle.end())?;
            }
            Ok(true)
        }
        Command::Toggle { state, row, col } => {
            let mut board: Board = state.parse()?;
            if !board.toggle_at(*row, *col) {
                return Err(AppError::OutOfRange {
                    row: *row,
                    col: *col,
                });
            }
            writeln!(out, "{board}")?;
            Ok(true)
        }
    }
}

fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    for row in solution.counts().chunks(BOARD_SIZE) {
        let line = row
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    writeln!(out, "cost: {}", solution.cost())
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "1011110111112101211101210";
    const SOLVABLE_END: &str = "0202002020000001000101110";
    const UNSOLVABLE_END: &str = "0011110111112101211101210";

    fn run_args(args: &[&str]) -> (Result<bool, AppError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("flippin").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&cli.command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check() {
        let (result, out) = run_args(&["check", START, SOLVABLE_END]);
        assert!(result.unwrap());
        assert_eq!(out, "solvable\n");

        let (result, out) = run_args(&["check", START, UNSOLVABLE_END]);
        assert!(!result.unwrap());
        assert_eq!(out, "unsolvable\n");
    }

    #[test]
    fn test_solve() {
        let (result, out) = run_args(&["solve", START, SOLVABLE_END]);
        assert!(result.unwrap());
        assert_eq!(
            out,
            "2 0 0 2 0\n0 0 0 2 0\n0 2 0 0 0\n0 0 2 0 0\n0 0 0 0 0\ncost: 10\n"
        );

        let (result, out) = run_args(&["solve", START, UNSOLVABLE_END]);
        assert!(!result.unwrap());
        assert_eq!(out, "unsolvable\n");

        let (result, _) = run_args(&["solve", START, "x"]);
        assert!(matches!(result, Err(AppError::Solver(_))));
    }

    #[test]
    fn test_toggle() {
        let (result, out) = run_args(&["toggle", START, "0", "0"]);
        assert!(result.unwrap());
        assert_eq!(out, "2111120111112101211101210\n");

        let (result, out) = run_args(&["toggle", START, "-1", "2"]);
        assert!(matches!(
            result,
            Err(AppError::OutOfRange { row: -1, col: 2 })
        ));
        assert!(out.is_empty());

        let (result, _) = run_args(&["toggle", "012", "0", "0"]);
        assert!(matches!(result, Err(AppError::Board(_))));
    }

    #[test]
    fn test_import() {
        let path = std::env::temp_dir().join(format!("flippin-import-{}.json", std::process::id()));
        fs::write(
            &path,
            format!(
                r#"[["Mine", {{"start": "{START}", "end": "{SOLVABLE_END}"}}],
                    ["Nope", {{"start": "{START}", "end": "{UNSOLVABLE_END}"}}]]"#
            ),
        )
        .unwrap();

        let path_str = path.to_str().unwrap().to_owned();
        let (result, out) = run_args(&["import", &path_str]);
        fs::remove_file(&path).unwrap();

        assert!(result.unwrap());
        assert_eq!(
            out,
            format!("accepted 1 puzzle(s)\nCSTM-Mine: {START} -> {SOLVABLE_END}\n")
        );
    }

    #[test]
    fn test_import_missing_file() {
        let (result, _) = run_args(&["import", "/nonexistent/flippin.json"]);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
