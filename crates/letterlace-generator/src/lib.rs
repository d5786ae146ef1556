//! Random letter-board generation.
//!
//! This crate fills boards with letters drawn uniformly from an alphabet,
//! the way the "randomize" affordance of a board UI does. Generation is
//! reproducible: every generated board carries the seed that produced it,
//! and the same seed always reproduces the same board.
//!
//! # Examples
//!
//! ```
//! use letterlace_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::new();
//! let board = generator.generate_seeded(4, 42);
//!
//! assert_eq!(board.grid.size(), 4);
//! assert_eq!(board.seed, 42);
//!
//! // Same seed, same board
//! let again = generator.generate_seeded(4, 42);
//! assert_eq!(board.grid, again.grid);
//! ```

use letterlace_core::{Cell, LetterGrid};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// The uppercase Latin alphabet used by default.
pub const LATIN_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Fills boards with uniformly random letters from a fixed alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGenerator {
    alphabet: Vec<char>,
}

/// A generated board together with the seed that produced it.
///
/// Re-running the generator with the same alphabet, size, and seed
/// reproduces the board exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated board, every cell filled with a letter.
    pub grid: LetterGrid,
    /// The PRNG seed the board was generated from.
    pub seed: u64,
}

impl BoardGenerator {
    /// Creates a generator over the uppercase Latin alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alphabet: LATIN_ALPHABET.to_vec(),
        }
    }

    /// Creates a generator over a custom alphabet.
    ///
    /// Letters are uppercased; each cell receives exactly one alphabet entry.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    #[must_use]
    pub fn with_alphabet<I>(alphabet: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let alphabet: Vec<char> = alphabet
            .into_iter()
            .flat_map(char::to_uppercase)
            .collect();
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        Self { alphabet }
    }

    /// Returns the alphabet letters are drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generates a board of the given size from a fresh random seed.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn generate(&self, size: u8) -> GeneratedBoard {
        self.generate_seeded(size, rand::random())
    }

    /// Generates a board of the given size from an explicit seed.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn generate_seeded(&self, size: u8, seed: u64) -> GeneratedBoard {
        assert!(size > 0, "board size must be at least 1");
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let cells = (0..usize::from(size) * usize::from(size))
            .map(|_| Cell::from(self.alphabet[rng.random_range(0..self.alphabet.len())]))
            .collect();
        let grid = LetterGrid::new(size, cells)
            .unwrap_or_else(|_| unreachable!("generated cell count always matches size"));
        GeneratedBoard { grid, seed }
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
