//! Letterlace command-line front end.
//!
//! Stands in for an interactive board UI as the input/output collaborator:
//! it reads the dictionary word list and board layout, drives a
//! [`GameSession`], and prints the scored results.

mod cli;
mod output;

use std::{fs, io, path::Path, process};

use clap::Parser as _;
use letterlace_core::{GridParseError, LetterGrid, Lexicon};
use letterlace_game::{GameError, GameSession};
use letterlace_generator::BoardGenerator;

use crate::{
    cli::{Args, Command, RandomArgs, SolveArgs},
    output::SolveReport,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("invalid board layout: {_0}")]
    Layout(GridParseError),
    #[display("{_0}")]
    Game(GameError),
    #[display("{_0}")]
    Json(serde_json::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Command::Solve(args) => solve(&args),
        Command::Random(args) => random(&args),
    }
}

fn solve(args: &SolveArgs) -> Result<(), AppError> {
    let layout = match (&args.grid, &args.grid_file) {
        (Some(rows), None) => rows.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        _ => unreachable!("clap enforces exactly one board source"),
    };
    let grid: LetterGrid = layout.parse()?;
    let size = grid.size();
    log::debug!("solving a {size}×{size} board");
    let report = solve_board(&grid, args.bonus, &args.dictionary, None)?;
    emit(&report, args.json)
}

fn random(args: &RandomArgs) -> Result<(), AppError> {
    let generator = BoardGenerator::new();
    let board = match args.seed {
        Some(seed) => generator.generate_seeded(args.size, seed),
        None => generator.generate(args.size),
    };

    let Some(dictionary) = &args.dictionary else {
        println!("seed: {}", board.seed);
        print!("{}", board.grid);
        return Ok(());
    };

    let report = solve_board(&board.grid, args.bonus, dictionary, Some(board.seed))?;
    if !args.json {
        println!("seed: {}", board.seed);
        print!("{}", board.grid);
        println!();
    }
    emit(&report, args.json)
}

/// Drives a session over an already-validated board layout.
fn solve_board(
    grid: &LetterGrid,
    bonus: Option<usize>,
    dictionary: &Path,
    seed: Option<u64>,
) -> Result<SolveReport, AppError> {
    let mut session = GameSession::new(grid.size());
    for (index, pos) in grid.positions().enumerate() {
        session.set_entry(index, grid.cell(pos).letters().unwrap_or_default())?;
    }
    if let Some(index) = bonus {
        session.select_bonus(index)?;
    }
    session.install_dictionary(load_dictionary(dictionary)?);

    let outcome = session.solve()?;
    Ok(SolveReport::new(outcome, seed))
}

fn load_dictionary(path: &Path) -> Result<Lexicon, AppError> {
    let text = fs::read_to_string(path)?;
    Ok(Lexicon::from_text(&text))
}

fn emit(report: &SolveReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
