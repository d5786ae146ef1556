//! Word search over a letter grid.
//!
//! This crate hosts the search engine and everything downstream of it: the
//! prefix-pruned depth-first traversal ([`PathSearch`]), word scoring
//! ([`score`]), and per-word result aggregation ([`WordResults`]).
//!
//! The data flow is: a validated [`LetterGrid`] and a [`Lexicon`] go into
//! [`PathSearch`], which emits raw [`FoundWord`] candidates (one per distinct
//! path that spells a word); [`WordResults`] deduplicates them per word,
//! preferring bonus-using paths; the sorted view plus each entry's score is
//! what a presentation layer consumes.
//!
//! [`LetterGrid`]: letterlace_core::LetterGrid
//! [`Lexicon`]: letterlace_core::Lexicon
//!
//! # Examples
//!
//! ```
//! use letterlace_core::{Lexicon, LetterGrid};
//! use letterlace_solver::{PathSearch, WordResults};
//!
//! let grid: LetterGrid = "CAT XXX XXX".parse()?;
//! let lexicon = Lexicon::build(["cat"]);
//!
//! let results: WordResults = PathSearch::new(&grid, &lexicon).run().into_iter().collect();
//! let view = results.sorted_view();
//!
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].word(), "CAT");
//! assert_eq!(view[0].score(), 1);
//! # Ok::<(), letterlace_core::GridParseError>(())
//! ```

pub mod testing;

mod results;
mod score;
mod search;

pub use self::{
    results::{FoundWord, WordResults},
    score::{BONUS_POINTS, score},
    search::PathSearch,
};
