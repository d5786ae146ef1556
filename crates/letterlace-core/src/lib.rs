//! Core data structures for letter-grid word tracing.
//!
//! This crate provides the fundamental, immutable data structures shared by the
//! search, generation, and game-session components.
//!
//! # Overview
//!
//! - [`position`]: Cell coordinates on a square board, with 8-directional
//!   neighbour enumeration and row-major linear indexing.
//! - [`cell`]: A single tile, either blocked or holding normalized letters.
//! - [`grid`]: [`LetterGrid`], a validated snapshot of the board plus the
//!   optional bonus cell. Invariants (cell count matches the declared size,
//!   bonus index in bounds) are enforced at construction, so downstream
//!   consumers never re-validate.
//! - [`lexicon`]: [`Lexicon`], the word and word-prefix membership sets that
//!   drive prefix-pruned search.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{Lexicon, LetterGrid, Position};
//!
//! let grid: LetterGrid = "CAT OXX XXX".parse()?;
//! let lexicon = Lexicon::build(["cat", "cot", "to"]);
//!
//! assert_eq!(grid.size(), 3);
//! assert!(lexicon.contains("CAT"));
//! assert!(lexicon.is_prefix("CO"));
//! assert!(!lexicon.contains("TO")); // shorter than three letters
//!
//! let corner = Position::new(0, 0);
//! assert_eq!(corner.neighbours(grid.size()).count(), 3);
//! # Ok::<(), letterlace_core::GridParseError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod lexicon;
pub mod position;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    grid::{GridError, GridParseError, LetterGrid},
    lexicon::Lexicon,
    position::{Position, TracePath},
};
