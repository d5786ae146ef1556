//! The board snapshot consumed by the search.

use std::{fmt, str::FromStr};

use crate::{Cell, Position};

/// An immutable snapshot of an N×N letter board.
///
/// The grid stores its tiles in row-major order together with the optional
/// bonus cell (a linear index). Both structural invariants are enforced at
/// construction: the cell count must equal the square of the declared size,
/// and a bonus index must be in bounds. Consumers can therefore index
/// without re-validating.
///
/// # Examples
///
/// ```
/// use letterlace_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "CAT XXX XXX".parse::<LetterGrid>()?.with_bonus(0)?;
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.cell(Position::new(1, 0)).letters(), Some("A"));
/// assert_eq!(grid.bonus(), Some(0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<Cell>,
    bonus: Option<usize>,
}

/// An invalid board configuration, reported at grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The board has no cells.
    #[display("board has no cells")]
    Empty,
    /// The cell count does not match the declared size.
    #[display("board declared {size}×{size} but holds {cells} cells")]
    DimensionMismatch {
        /// The declared board size.
        size: u8,
        /// The number of cells actually supplied.
        cells: usize,
    },
    /// The bonus index points outside the board.
    #[display("bonus index {index} out of bounds for a board of {cells} cells")]
    BonusOutOfBounds {
        /// The rejected linear index.
        index: usize,
        /// The number of cells on the board.
        cells: usize,
    },
}

impl LetterGrid {
    /// Creates a grid from its size and row-major cells, without a bonus
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a zero-size board and
    /// [`GridError::DimensionMismatch`] if `cells.len()` is not `size²`.
    pub fn new(size: u8, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let expected = usize::from(size) * usize::from(size);
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self {
            size,
            cells,
            bonus: None,
        })
    }

    /// Designates the cell at the given linear index as the bonus cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BonusOutOfBounds`] if `index` is not less than
    /// the cell count.
    pub fn with_bonus(mut self, index: usize) -> Result<Self, GridError> {
        if index >= self.cells.len() {
            return Err(GridError::BonusOutOfBounds {
                index,
                cells: self.cells.len(),
            });
        }
        self.bonus = Some(index);
        Ok(self)
    }

    /// Returns the board size N.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total cell count N².
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the linear index of the bonus cell, if one is designated.
    #[must_use]
    #[inline]
    pub const fn bonus(&self) -> Option<usize> {
        self.bonus
    }

    /// Returns the bonus cell as a position, if one is designated.
    #[must_use]
    pub fn bonus_position(&self) -> Option<Position> {
        self.bonus.map(|index| Position::from_index(index, self.size))
    }

    /// Returns the tile at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index(self.size)]
    }

    /// Returns the row-major linear index of a position on this board.
    #[must_use]
    #[inline]
    pub fn index_of(&self, pos: Position) -> usize {
        pos.index(self.size)
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..usize::from(size) * usize::from(size)).map(move |index| Position::from_index(index, size))
    }
}

/// A malformed textual board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contains no rows.
    #[display("board text contains no rows")]
    Empty,
    /// A row's width differs from the row count.
    #[display("row {row} has {found} cells, expected {expected}")]
    WidthMismatch {
        /// The zero-based row that failed.
        row: usize,
        /// The expected width (the number of rows).
        expected: usize,
        /// The width actually found.
        found: usize,
    },
    /// A character that is neither a letter nor an empty-cell marker.
    #[display("invalid cell character {ch:?}")]
    InvalidCell {
        /// The rejected character.
        ch: char,
    },
    /// More rows than a board can hold.
    #[display("board text has {rows} rows, at most 255 supported")]
    TooLarge {
        /// The number of rows found.
        rows: usize,
    },
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    /// Parses the whitespace-separated single-letter layout used throughout
    /// tests and on the command line.
    ///
    /// Each whitespace-separated token is one row; `_` and `.` mark empty
    /// cells, letters are uppercased. The row count determines the board
    /// size, and every row must be exactly that wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use letterlace_core::{LetterGrid, Position};
    ///
    /// let grid: LetterGrid = "
    ///     CAT
    ///     __X
    ///     XXX
    /// "
    /// .parse()?;
    /// assert!(grid.cell(Position::new(0, 1)).is_empty());
    /// # Ok::<(), letterlace_core::GridParseError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }
        let size = u8::try_from(rows.len()).map_err(|_| GridParseError::TooLarge { rows: rows.len() })?;

        let mut cells = Vec::with_capacity(usize::from(size) * usize::from(size));
        for (y, row) in rows.iter().enumerate() {
            let mut width = 0;
            for ch in row.chars() {
                width += 1;
                match ch {
                    '_' | '.' => cells.push(Cell::Empty),
                    ch if ch.is_alphabetic() => cells.push(Cell::from(ch)),
                    ch => return Err(GridParseError::InvalidCell { ch }),
                }
            }
            if width != usize::from(size) {
                return Err(GridParseError::WidthMismatch {
                    row: y,
                    expected: usize::from(size),
                    found: width,
                });
            }
        }

        Ok(Self {
            size,
            cells,
            bonus: None,
        })
    }
}

impl fmt::Display for LetterGrid {
    /// Formats the board one row per line in the same layout [`FromStr`]
    /// accepts, provided every tile holds at most one letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}", self.cell(Position::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_dimension_mismatch() {
        let cells = vec![Cell::from('A'); 8];
        assert_eq!(
            LetterGrid::new(3, cells),
            Err(GridError::DimensionMismatch { size: 3, cells: 8 }),
        );
    }

    #[test]
    fn test_new_rejects_empty_board() {
        assert_eq!(LetterGrid::new(0, Vec::new()), Err(GridError::Empty));
    }

    #[test]
    fn test_bonus_bounds() {
        let grid: LetterGrid = "AB CD".parse().unwrap();
        assert!(grid.clone().with_bonus(3).is_ok());
        assert_eq!(
            grid.with_bonus(4),
            Err(GridError::BonusOutOfBounds { index: 4, cells: 4 }),
        );
    }

    #[test]
    fn test_parse_layout() {
        let grid: LetterGrid = "CA _T".parse().unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.cell(Position::new(0, 0)).letters(), Some("C"));
        assert_eq!(grid.cell(Position::new(1, 0)).letters(), Some("A"));
        assert!(grid.cell(Position::new(0, 1)).is_empty());
        assert_eq!(grid.cell(Position::new(1, 1)).letters(), Some("T"));
    }

    #[test]
    fn test_parse_lowercases_are_normalized() {
        let grid: LetterGrid = "ab cd".parse().unwrap();
        assert_eq!(grid.cell(Position::new(0, 0)).letters(), Some("A"));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            "CAT XX XXX".parse::<LetterGrid>(),
            Err(GridParseError::WidthMismatch {
                row: 1,
                expected: 3,
                found: 2,
            }),
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "A1 BC".parse::<LetterGrid>(),
            Err(GridParseError::InvalidCell { ch: '1' }),
        );
        assert_eq!("".parse::<LetterGrid>(), Err(GridParseError::Empty));
    }

    #[test]
    fn test_display_round_trips() {
        let grid: LetterGrid = "CA _T".parse().unwrap();
        assert_eq!(grid.to_string().parse::<LetterGrid>().unwrap(), grid);
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid: LetterGrid = "AB CD".parse().unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ],
        );
    }
}
