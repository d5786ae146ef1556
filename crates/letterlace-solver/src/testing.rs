//! Test utilities for the word search.
//!
//! This module provides [`SearchTester`], a fluent harness for driving
//! [`PathSearch`](crate::PathSearch) over small boards and asserting on the
//! aggregated results.
//!
//! # Example
//!
//! ```
//! use letterlace_solver::testing::SearchTester;
//!
//! SearchTester::from_str("
//!     CAT
//!     XXX
//!     XXX
//! ")
//! .with_words(["cat"])
//! .with_bonus(0)
//! .search()
//! .assert_found("CAT")
//! .assert_uses_bonus("CAT", true)
//! .assert_score("CAT", 4);
//! ```

use letterlace_core::{LetterGrid, Lexicon, Position};

use crate::{FoundWord, PathSearch, WordResults};

/// A fluent test harness around [`PathSearch`].
///
/// Build the board with [`from_str`](Self::from_str) (or [`new`](Self::new)
/// for boards with multi-letter tiles), supply the lexicon and bonus cell,
/// call [`search`](Self::search), then chain assertions.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SearchTester {
    grid: LetterGrid,
    lexicon: Lexicon,
    results: WordResults,
}

impl SearchTester {
    /// Creates a tester for an already-built grid with an empty lexicon.
    #[must_use]
    pub fn new(grid: LetterGrid) -> Self {
        Self {
            grid,
            lexicon: Lexicon::default(),
            results: WordResults::new(),
        }
    }

    /// Creates a tester from a board layout string.
    ///
    /// The format matches [`LetterGrid`]'s `FromStr`: one whitespace-separated
    /// token per row, `_`/`.` for empty cells.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid board.
    #[track_caller]
    pub fn from_str(layout: &str) -> Self {
        let grid = layout
            .parse()
            .unwrap_or_else(|err| panic!("invalid board layout: {err}"));
        Self::new(grid)
    }

    /// Replaces the lexicon with one built from the given raw words.
    #[must_use]
    pub fn with_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.lexicon = Lexicon::build(words);
        self
    }

    /// Designates the bonus cell by linear index.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside the board.
    #[must_use]
    #[track_caller]
    pub fn with_bonus(mut self, index: usize) -> Self {
        let grid = self.grid;
        self.grid = grid
            .with_bonus(index)
            .unwrap_or_else(|err| panic!("invalid bonus cell: {err}"));
        self
    }

    /// Runs the search and aggregates candidates, returning self for
    /// chaining.
    #[must_use]
    pub fn search(mut self) -> Self {
        self.results = PathSearch::new(&self.grid, &self.lexicon).run().into_iter().collect();
        self
    }

    /// Returns the aggregated results of the last [`search`](Self::search).
    #[must_use]
    pub fn results(&self) -> &WordResults {
        &self.results
    }

    fn found_words(&self) -> Vec<&str> {
        self.results.sorted_view().iter().map(|f| f.word()).collect()
    }

    #[track_caller]
    fn entry(&self, word: &str) -> &FoundWord {
        self.results
            .get(word)
            .unwrap_or_else(|| panic!("word {word:?} was not found; found: {:?}", self.found_words()))
    }

    /// Asserts that `word` was found.
    #[track_caller]
    pub fn assert_found(self, word: &str) -> Self {
        let _ = self.entry(word);
        self
    }

    /// Asserts that `word` was not found.
    #[track_caller]
    pub fn assert_not_found(self, word: &str) -> Self {
        assert!(
            self.results.get(word).is_none(),
            "word {word:?} was found but should not be",
        );
        self
    }

    /// Asserts that exactly the given words were found, regardless of order.
    #[track_caller]
    pub fn assert_found_exactly<'w>(self, words: impl IntoIterator<Item = &'w str>) -> Self {
        let mut expected: Vec<&str> = words.into_iter().collect();
        expected.sort_unstable();
        let mut found = self.found_words();
        found.sort_unstable();
        assert_eq!(found, expected, "found word set mismatch");
        self
    }

    /// Asserts how many distinct words were found.
    #[track_caller]
    pub fn assert_count(self, count: usize) -> Self {
        assert_eq!(
            self.results.len(),
            count,
            "expected {count} words, found {:?}",
            self.found_words(),
        );
        self
    }

    /// Asserts the retained entry's bonus flag.
    #[track_caller]
    pub fn assert_uses_bonus(self, word: &str, uses_bonus: bool) -> Self {
        assert_eq!(
            self.entry(word).uses_bonus(),
            uses_bonus,
            "bonus flag mismatch for {word:?}",
        );
        self
    }

    /// Asserts the retained entry's score.
    #[track_caller]
    pub fn assert_score(self, word: &str, score: u32) -> Self {
        assert_eq!(self.entry(word).score(), score, "score mismatch for {word:?}");
        self
    }

    /// Asserts the retained entry's exemplar path.
    #[track_caller]
    pub fn assert_path(self, word: &str, path: impl IntoIterator<Item = Position>) -> Self {
        let expected: Vec<Position> = path.into_iter().collect();
        assert_eq!(self.entry(word).path(), expected, "path mismatch for {word:?}");
        self
    }

    /// Asserts the exact presentation order of the sorted view.
    #[track_caller]
    pub fn assert_order<'w>(self, words: impl IntoIterator<Item = &'w str>) -> Self {
        let expected: Vec<&str> = words.into_iter().collect();
        assert_eq!(self.found_words(), expected, "presentation order mismatch");
        self
    }

    /// Asserts structural integrity of every retained entry: the path visits
    /// pairwise-distinct, consecutively 8-adjacent cells whose letters
    /// concatenate to the word, and the word is a lexicon word of at least
    /// three characters.
    #[track_caller]
    pub fn assert_paths_spell_words(self) -> Self {
        for found in self.results.iter() {
            let word = found.word();
            let path = found.path();
            assert!(
                self.lexicon.contains(word),
                "found word {word:?} is not in the lexicon",
            );
            assert!(word.chars().count() >= Lexicon::MIN_WORD_LEN, "word {word:?} too short");
            assert!(!path.is_empty(), "empty path for {word:?}");
            for window in path.windows(2) {
                assert!(
                    window[0].is_adjacent(window[1]),
                    "path cells {} and {} are not adjacent for {word:?}",
                    window[0],
                    window[1],
                );
            }
            for (i, a) in path.iter().enumerate() {
                for b in &path[i + 1..] {
                    assert_ne!(a, b, "path revisits {a} for {word:?}");
                }
            }
            let spelled: String = path
                .iter()
                .filter_map(|&pos| self.grid.cell(pos).letters())
                .collect();
            assert_eq!(spelled, word, "path does not spell {word:?}");
        }
        self
    }
}
