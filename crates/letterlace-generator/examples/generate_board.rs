//! Example demonstrating random board generation.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a specific board:
//!
//! ```sh
//! cargo run --example generate_board -- --size 5 --seed 42
//! ```

use clap::Parser;
use letterlace_generator::BoardGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size N (the board is N×N).
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: u8,

    /// PRNG seed for a reproducible board.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let generator = BoardGenerator::new();
    let board = match args.seed {
        Some(seed) => generator.generate_seeded(args.size, seed),
        None => generator.generate(args.size),
    };

    println!("seed: {}", board.seed);
    print!("{}", board.grid);
}
