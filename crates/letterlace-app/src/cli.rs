//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a board against a dictionary word list.
    Solve(SolveArgs),
    /// Generate a random board, optionally solving it.
    Random(RandomArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Debug, clap::Args)]
pub struct SolveArgs {
    /// Path to a newline-delimited dictionary word list.
    #[arg(long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Board rows, whitespace-separated (`_` or `.` marks an empty cell).
    #[arg(
        long,
        value_name = "ROWS",
        conflicts_with = "grid_file",
        required_unless_present = "grid_file"
    )]
    pub grid: Option<String>,

    /// Read the board layout from a file instead.
    #[arg(long, value_name = "FILE")]
    pub grid_file: Option<PathBuf>,

    /// Linear (row-major) index of the bonus cell.
    #[arg(long, value_name = "INDEX")]
    pub bonus: Option<usize>,

    /// Emit results as JSON instead of a text table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `random` subcommand.
#[derive(Debug, clap::Args)]
pub struct RandomArgs {
    /// Board size N (the board is N×N).
    #[arg(long, value_name = "N", default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    pub size: u8,

    /// PRNG seed for a reproducible board.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Solve the generated board against this word list.
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Linear (row-major) index of the bonus cell.
    #[arg(long, value_name = "INDEX", requires = "dictionary")]
    pub bonus: Option<usize>,

    /// Emit results as JSON instead of a text table.
    #[arg(long, requires = "dictionary")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_solve_requires_a_board_source() {
        let result = Args::try_parse_from(["letterlace", "solve", "--dictionary", "words.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_solve_parses_grid_and_bonus() {
        let args = Args::try_parse_from([
            "letterlace",
            "solve",
            "--dictionary",
            "words.txt",
            "--grid",
            "CAT XXX XXX",
            "--bonus",
            "0",
        ])
        .unwrap();
        let Command::Solve(solve) = args.command else {
            panic!("expected solve subcommand");
        };
        assert_eq!(solve.grid.as_deref(), Some("CAT XXX XXX"));
        assert_eq!(solve.bonus, Some(0));
        assert!(!solve.json);
    }

    #[test]
    fn test_random_rejects_zero_size() {
        let result = Args::try_parse_from(["letterlace", "random", "--size", "0"]);
        assert!(result.is_err());
    }
}
