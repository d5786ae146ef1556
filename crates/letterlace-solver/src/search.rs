//! The prefix-pruned depth-first search engine.

use letterlace_core::{LetterGrid, Lexicon, Position};
use tinyvec::TinyVec;

use crate::FoundWord;

/// The depth-first word search over a letter grid.
///
/// From every cell in row-major order, the search extends a path through
/// 8-adjacent cells, never revisiting a cell within one path. A branch is
/// abandoned as soon as the accumulated letters are not a prefix of any
/// word in the lexicon; without that pruning the traversal would visit
/// every simple path on the board. Each time the accumulated letters form
/// a full word, a [`FoundWord`] candidate is emitted with a snapshot of the
/// current path and whether it crossed the bonus cell.
///
/// The emitted sequence carries one candidate per (word, path) discovery and
/// no ordering guarantee; callers aggregate through
/// [`WordResults`](crate::WordResults) and sort there.
///
/// # Complexity
///
/// Worst case the search is exponential in the grid area (bounded by
/// 8^(N²) path extensions): prefix pruning is the only bound, and paths
/// starting at different cells are genuinely distinct searches, so there is
/// no memoization or transposition table across starting cells. With a real
/// dictionary the pruning cuts almost every branch within a few letters;
/// pathological lexicon/board pairs are not capped, by design.
///
/// # Examples
///
/// ```
/// use letterlace_core::{Lexicon, LetterGrid};
/// use letterlace_solver::PathSearch;
///
/// let grid: LetterGrid = "CAT XXX XXX".parse()?;
/// let lexicon = Lexicon::build(["cat"]);
///
/// let found = PathSearch::new(&grid, &lexicon).run();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].word(), "CAT");
/// # Ok::<(), letterlace_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathSearch<'a> {
    grid: &'a LetterGrid,
    lexicon: &'a Lexicon,
}

/// Mutable traversal state, restored on backtrack so sibling branches never
/// observe each other's marks.
#[derive(Debug)]
struct TraceState {
    visited: Vec<bool>,
    path: TinyVec<[Position; 16]>,
    word: String,
    uses_bonus: bool,
}

impl<'a> PathSearch<'a> {
    /// Creates a search over a validated grid and a fully built lexicon.
    #[must_use]
    pub fn new(grid: &'a LetterGrid, lexicon: &'a Lexicon) -> Self {
        Self { grid, lexicon }
    }

    /// Runs the search, returning all raw candidates.
    #[must_use]
    pub fn run(&self) -> Vec<FoundWord> {
        let mut found = Vec::new();
        let mut state = TraceState {
            visited: vec![false; self.grid.cell_count()],
            path: TinyVec::default(),
            word: String::new(),
            uses_bonus: false,
        };
        for start in self.grid.positions() {
            self.explore(start, &mut state, &mut found);
        }
        found
    }

    fn explore(&self, pos: Position, state: &mut TraceState, found: &mut Vec<FoundWord>) {
        let index = self.grid.index_of(pos);
        // Revisit guard; neighbour expansion below only filters on bounds.
        if state.visited[index] {
            return;
        }
        let Some(letters) = self.grid.cell(pos).letters() else {
            return;
        };

        let word_len = state.word.len();
        state.word.push_str(letters);
        if !self.lexicon.is_prefix(&state.word) {
            state.word.truncate(word_len);
            return;
        }

        state.visited[index] = true;
        state.path.push(pos);
        let had_bonus = state.uses_bonus;
        state.uses_bonus |= self.grid.bonus() == Some(index);

        if self.lexicon.contains(&state.word) {
            found.push(FoundWord::new(
                state.word.as_str(),
                state.path.to_vec(),
                state.uses_bonus,
            ));
        }

        for next in pos.neighbours(self.grid.size()) {
            self.explore(next, state, found);
        }

        state.uses_bonus = had_bonus;
        state.path.pop();
        state.visited[index] = false;
        state.word.truncate(word_len);
    }
}
