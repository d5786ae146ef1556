//! The interactive play session.

use letterlace_core::{Cell, GridError, LetterGrid, Lexicon, TracePath};
use letterlace_generator::BoardGenerator;
use letterlace_solver::{PathSearch, WordResults};

use crate::DictionaryState;

/// An error reported by a session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Solve was invoked before the dictionary finished building.
    ///
    /// Recoverable: retry once the acquisition collaborator has delivered
    /// the lexicon.
    #[display("dictionary is not ready yet")]
    DictionaryNotReady,
    /// The dictionary acquisition collaborator reported failure.
    #[display("dictionary source unavailable: {reason}")]
    DictionaryUnavailable {
        /// The collaborator's failure description.
        reason: String,
    },
    /// A cell index points outside the board.
    #[display("cell index {index} out of bounds for a board of {cells} cells")]
    CellOutOfBounds {
        /// The rejected linear index.
        index: usize,
        /// The number of cells on the board.
        cells: usize,
    },
    /// The board entries do not form a valid grid.
    ///
    /// Fatal to that solve call; the board must be corrected before
    /// retrying.
    #[display("invalid board: {_0}")]
    InvalidBoard(GridError),
}

/// One solved word, scored and ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    /// The word, normalized uppercase.
    pub word: String,
    /// The word's point value, bonus included.
    pub score: u32,
    /// Whether the exemplar path crosses the bonus cell.
    pub uses_bonus: bool,
    /// The exemplar path, for highlighting.
    pub path: TracePath,
}

/// The result of a successful solve, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOutcome {
    words: Vec<ScoredWord>,
}

impl SolveOutcome {
    /// Returns the solved words, longest first, ties alphabetical.
    #[must_use]
    pub fn words(&self) -> &[ScoredWord] {
        &self.words
    }

    /// Consumes the outcome, returning the solved words.
    #[must_use]
    pub fn into_words(self) -> Vec<ScoredWord> {
        self.words
    }

    /// Returns the sum of all word scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.words.iter().map(|word| word.score).sum()
    }

    /// Returns `true` if no words were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An interactive play session.
///
/// The session owns what an interactive front end edits between solves: the
/// per-cell text entries, the single-letter toggle, the bonus-cell
/// selection, and the dictionary's readiness state. A [`solve`](Self::solve)
/// snapshots the entries into an immutable [`LetterGrid`], runs the search,
/// and returns scored results in presentation order.
#[derive(Debug, Clone)]
pub struct GameSession {
    dictionary: DictionaryState,
    size: u8,
    entries: Vec<String>,
    bonus: Option<usize>,
    single_letter: bool,
}

impl GameSession {
    /// Creates a session with an empty N×N board and a pending dictionary.
    ///
    /// The single-letter toggle starts on.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self {
            dictionary: DictionaryState::Pending,
            size,
            entries: vec![String::new(); usize::from(size) * usize::from(size)],
            bonus: None,
            single_letter: true,
        }
    }

    /// Returns the board size N.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total cell count N².
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.entries.len()
    }

    /// Rebuilds the board at a new size, clearing all entries and the bonus
    /// selection.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn resize(&mut self, size: u8) {
        assert!(size > 0, "board size must be at least 1");
        self.size = size;
        self.entries = vec![String::new(); usize::from(size) * usize::from(size)];
        self.bonus = None;
    }

    /// Returns the entry text at a linear index, or `None` out of bounds.
    ///
    /// An in-bounds empty string is an empty (blocked) cell.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Sets a cell's entry text.
    ///
    /// The text is trimmed, uppercased, and truncated to the entry cap: one
    /// character while the single-letter toggle is on, two otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfBounds`] if `index` points outside the
    /// board.
    pub fn set_entry(&mut self, index: usize, text: &str) -> Result<(), GameError> {
        let cells = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(GameError::CellOutOfBounds { index, cells })?;
        let cap = if self.single_letter { 1 } else { 2 };
        *entry = text.trim().chars().take(cap).collect::<String>().to_uppercase();
        Ok(())
    }

    /// Returns whether the single-letter entry cap is on.
    #[must_use]
    pub const fn single_letter(&self) -> bool {
        self.single_letter
    }

    /// Toggles the single-letter entry cap.
    ///
    /// The cap applies to subsequent [`set_entry`](Self::set_entry) calls;
    /// existing entries are left as typed.
    pub fn set_single_letter(&mut self, single_letter: bool) {
        self.single_letter = single_letter;
    }

    /// Designates the bonus cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfBounds`] if `index` points outside the
    /// board.
    pub fn select_bonus(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.entries.len() {
            return Err(GameError::CellOutOfBounds {
                index,
                cells: self.entries.len(),
            });
        }
        self.bonus = Some(index);
        Ok(())
    }

    /// Clears the bonus-cell selection.
    pub fn clear_bonus(&mut self) {
        self.bonus = None;
    }

    /// Returns the bonus cell's linear index, if one is selected.
    #[must_use]
    pub const fn bonus(&self) -> Option<usize> {
        self.bonus
    }

    /// Fills every cell with a random letter, returning the seed used.
    pub fn randomize(&mut self, generator: &BoardGenerator) -> u64 {
        let board = generator.generate(self.size);
        self.apply_generated(&board.grid);
        board.seed
    }

    /// Fills every cell from an explicit seed, for reproducible boards.
    pub fn randomize_seeded(&mut self, generator: &BoardGenerator, seed: u64) {
        let board = generator.generate_seeded(self.size, seed);
        self.apply_generated(&board.grid);
    }

    fn apply_generated(&mut self, grid: &LetterGrid) {
        for (entry, pos) in self.entries.iter_mut().zip(grid.positions()) {
            *entry = grid.cell(pos).letters().unwrap_or_default().to_owned();
        }
    }

    /// Installs a fully built lexicon, making the session searchable.
    ///
    /// A degenerate (zero-word) lexicon is accepted — every solve will find
    /// nothing — but logged, so the state is never silently mistaken for a
    /// populated dictionary.
    pub fn install_dictionary(&mut self, lexicon: Lexicon) {
        if lexicon.is_empty() {
            log::warn!("installing a dictionary with zero words; every solve will find nothing");
        } else {
            log::info!("dictionary ready: {} words", lexicon.word_count());
        }
        self.dictionary = DictionaryState::Ready(lexicon);
    }

    /// Records that the dictionary acquisition collaborator failed.
    pub fn dictionary_failed(&mut self, reason: impl Into<String>) {
        self.dictionary = DictionaryState::Unavailable {
            reason: reason.into(),
        };
    }

    /// Returns the dictionary's readiness state.
    #[must_use]
    pub const fn dictionary_state(&self) -> &DictionaryState {
        &self.dictionary
    }

    /// Returns `true` if a lexicon is installed and searchable.
    #[must_use]
    pub fn dictionary_ready(&self) -> bool {
        self.dictionary.is_ready()
    }

    /// Snapshots the current entries into an immutable grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] if the entries do not form a
    /// valid grid.
    pub fn board(&self) -> Result<LetterGrid, GameError> {
        let cells = self.entries.iter().map(|entry| Cell::from_input(entry)).collect();
        let grid = LetterGrid::new(self.size, cells).map_err(GameError::InvalidBoard)?;
        match self.bonus {
            Some(index) => grid.with_bonus(index).map_err(GameError::InvalidBoard),
            None => Ok(grid),
        }
    }

    /// Solves the current board against the installed dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DictionaryNotReady`] while acquisition is
    /// pending, [`GameError::DictionaryUnavailable`] if acquisition failed,
    /// and [`GameError::InvalidBoard`] if the entries do not form a valid
    /// grid.
    pub fn solve(&self) -> Result<SolveOutcome, GameError> {
        let lexicon = match &self.dictionary {
            DictionaryState::Ready(lexicon) => lexicon,
            DictionaryState::Pending => return Err(GameError::DictionaryNotReady),
            DictionaryState::Unavailable { reason } => {
                return Err(GameError::DictionaryUnavailable {
                    reason: reason.clone(),
                });
            }
        };
        let grid = self.board()?;
        let results: WordResults = PathSearch::new(&grid, lexicon).run().into_iter().collect();
        log::debug!(
            "found {} words on a {}×{} board",
            results.len(),
            self.size,
            self.size
        );
        let words = results
            .into_sorted()
            .into_iter()
            .map(|found| ScoredWord {
                word: found.word().to_owned(),
                score: found.score(),
                uses_bonus: found.uses_bonus(),
                path: found.path().to_vec(),
            })
            .collect();
        Ok(SolveOutcome { words })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_session() -> GameSession {
        let mut session = GameSession::new(3);
        for (index, letter) in ["C", "A", "T"].into_iter().enumerate() {
            session.set_entry(index, letter).unwrap();
        }
        session
    }

    #[test]
    fn test_solve_requires_ready_dictionary() {
        let session = cat_session();
        assert_eq!(session.solve(), Err(GameError::DictionaryNotReady));
    }

    #[test]
    fn test_solve_reports_unavailable_dictionary() {
        let mut session = cat_session();
        session.dictionary_failed("fetch failed");
        assert_eq!(
            session.solve(),
            Err(GameError::DictionaryUnavailable {
                reason: "fetch failed".into(),
            }),
        );
    }

    #[test]
    fn test_solve_finds_and_scores_words() {
        let mut session = cat_session();
        session.install_dictionary(Lexicon::build(["cat"]));

        let outcome = session.solve().unwrap();
        assert_eq!(outcome.words().len(), 1);
        let word = &outcome.words()[0];
        assert_eq!(word.word, "CAT");
        assert_eq!(word.score, 1);
        assert!(!word.uses_bonus);
        assert_eq!(outcome.total_score(), 1);
    }

    #[test]
    fn test_bonus_selection_raises_score() {
        let mut session = cat_session();
        session.install_dictionary(Lexicon::build(["cat"]));
        session.select_bonus(0).unwrap();

        let outcome = session.solve().unwrap();
        assert_eq!(outcome.words()[0].score, 4);
        assert!(outcome.words()[0].uses_bonus);
    }

    #[test]
    fn test_empty_dictionary_is_ready_but_finds_nothing() {
        let mut session = cat_session();
        session.install_dictionary(Lexicon::default());
        assert!(session.dictionary_ready());
        assert!(session.solve().unwrap().is_empty());
    }

    #[test]
    fn test_entry_normalization_respects_the_cap() {
        let mut session = GameSession::new(2);
        session.set_entry(0, " a ").unwrap();
        assert_eq!(session.entry(0), Some("A"));

        // Single-letter cap truncates to one character
        session.set_entry(1, "th").unwrap();
        assert_eq!(session.entry(1), Some("T"));

        session.set_single_letter(false);
        session.set_entry(2, "theo").unwrap();
        assert_eq!(session.entry(2), Some("TH"));
    }

    #[test]
    fn test_out_of_bounds_cells_are_rejected() {
        let mut session = GameSession::new(2);
        assert_eq!(
            session.set_entry(4, "A"),
            Err(GameError::CellOutOfBounds { index: 4, cells: 4 }),
        );
        assert_eq!(
            session.select_bonus(9),
            Err(GameError::CellOutOfBounds { index: 9, cells: 4 }),
        );
    }

    #[test]
    fn test_resize_clears_entries_and_bonus() {
        let mut session = cat_session();
        session.select_bonus(0).unwrap();
        session.resize(4);
        assert_eq!(session.cell_count(), 16);
        assert_eq!(session.bonus(), None);
        assert_eq!(session.entry(0), Some(""));
    }

    #[test]
    fn test_randomize_is_reproducible_by_seed() {
        let generator = BoardGenerator::new();
        let mut first = GameSession::new(4);
        let seed = first.randomize(&generator);
        assert!((0..first.cell_count()).all(|i| !first.entry(i).unwrap().is_empty()));

        let mut second = GameSession::new(4);
        second.randomize_seeded(&generator, seed);
        for index in 0..first.cell_count() {
            assert_eq!(first.entry(index), second.entry(index));
        }
    }
}
