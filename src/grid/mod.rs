//! The letter grid
//!
//! A [`Grid`] is an immutable rectangular matrix of single-character cells
//! together with the positional queries the word finder is built on: cell
//! lookup, row-major iteration, a letter-position index, and the
//! eight-direction span generators implemented in `grid/span.rs`.
//!
//! Cells are stored flat in row-major order. A cell may be empty (a hole in
//! the puzzle); empty cells never appear in the letter index and render as
//! `*`.

mod span;

use crate::core::Coord;
use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable rectangular grid of letters
///
/// Constructed once from parsed input, then only queried. Every accessor
/// that yields a sequence does so in row-major order (row ascending, then
/// column ascending); the word finder relies on that order to make
/// first-match results deterministic.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
    letter_index: FxHashMap<char, Vec<Coord>>,
}

/// Error type for grid construction and cell access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, rows) x [0, cols)` was passed to `at`
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// The addressed cell holds no letter
    EmptyCell(Coord),
    /// A row's length differs from the first row's during construction
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "Coordinate {coord} outside {rows}x{cols} grid")
            }
            Self::EmptyCell(coord) => write!(f, "Cell {coord} is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells, expected {expected} (grid must be rectangular)"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Build a grid from rows of letters
    ///
    /// # Errors
    /// Returns `GridError::RaggedRow` if any row's length differs from the
    /// first row's.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec!['A', 'B', 'C'],
    ///     vec!['D', 'E', 'F'],
    /// ]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 3));
    ///
    /// assert!(Grid::from_rows(vec![vec!['A'], vec!['B', 'C']]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        Self::from_cells(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Build a grid that may contain empty cells
    ///
    /// Empty cells (`None`) are holes: they never match any letter, are
    /// absent from [`positions_of`](Self::positions_of), and render as `*`.
    ///
    /// # Errors
    /// Returns `GridError::RaggedRow` if any row's length differs from the
    /// first row's.
    pub fn from_cells(cell_rows: Vec<Vec<Option<char>>>) -> Result<Self, GridError> {
        let rows = cell_rows.len();
        let cols = cell_rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, cell_row) in cell_rows.into_iter().enumerate() {
            if cell_row.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: cell_row.len(),
                });
            }
            cells.extend(cell_row);
        }

        // Row-major construction keeps each index bucket in row-major order.
        let mut letter_index: FxHashMap<char, Vec<Coord>> = FxHashMap::default();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(letter) = cell {
                letter_index
                    .entry(*letter)
                    .or_default()
                    .push(Coord::new(i / cols, i % cols));
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            letter_index,
        })
    }

    /// The grid shape as `(rows, cols)`
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cell slots, empty ones included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid has no cells at all
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Infallible cell lookup: `None` for out-of-bounds or empty slots
    #[inline]
    fn cell(&self, coord: Coord) -> Option<char> {
        if self.in_bounds(coord) {
            self.cells[coord.row * self.cols + coord.col]
        } else {
            None
        }
    }

    /// The letter at `coord`
    ///
    /// Span-derived coordinates are always in bounds, so the error cases
    /// here are precondition failures of direct callers, not of the search.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `coord` lies outside the grid,
    /// `GridError::EmptyCell` if the slot holds no letter.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Coord;
    /// use wordsearch::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec!['A', 'B']]).unwrap();
    /// assert_eq!(grid.at(Coord::new(0, 1)).unwrap(), 'B');
    /// assert!(grid.at(Coord::new(1, 0)).is_err());
    /// ```
    pub fn at(&self, coord: Coord) -> Result<char, GridError> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[coord.row * self.cols + coord.col].ok_or(GridError::EmptyCell(coord))
    }

    /// Row-major iterator over the letters of occupied cells
    ///
    /// Restartable: each call yields a fresh iterator over the same
    /// sequence.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.coordinates_and_letters().map(|(_, letter)| letter)
    }

    /// Row-major iterator over `(coordinate, letter)` pairs
    ///
    /// The order (row ascending, then column ascending) decides which
    /// occurrence of a repeated letter the finder tries first, so it is
    /// part of the contract, not an implementation detail.
    pub fn coordinates_and_letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|letter| (Coord::new(i / self.cols, i % self.cols), letter))
        })
    }

    /// Row-major iterator over the coordinates holding `letter`
    ///
    /// Served from the letter index built at construction; yields the same
    /// sequence as filtering [`coordinates_and_letters`](Self::coordinates_and_letters)
    /// by `letter`.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Coord;
    /// use wordsearch::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec!['C', 'A', 'T'],
    ///     vec!['N', 'T', 'A'],
    /// ]).unwrap();
    ///
    /// let positions: Vec<Coord> = grid.positions_of('A').collect();
    /// assert_eq!(positions, vec![Coord::new(0, 1), Coord::new(1, 2)]);
    /// assert_eq!(grid.positions_of('Z').count(), 0);
    /// ```
    pub fn positions_of(&self, letter: char) -> impl Iterator<Item = Coord> + '_ {
        self.letter_index
            .get(&letter)
            .into_iter()
            .flatten()
            .copied()
    }

    /// The letters along a sequence of coordinates
    ///
    /// Out-of-bounds coordinates are a caller bug (span-derived coordinates
    /// never are); they are checked in debug builds and skipped, as are
    /// empty cells.
    pub fn letters_along<'a>(
        &'a self,
        coords: &'a [Coord],
    ) -> impl Iterator<Item = char> + 'a {
        coords.iter().filter_map(|&coord| {
            debug_assert!(self.in_bounds(coord), "coordinate {coord} out of bounds");
            self.cell(coord)
        })
    }

    /// The word spelled by a sequence of coordinates
    #[must_use]
    pub fn word_along(&self, coords: &[Coord]) -> String {
        self.letters_along(coords).collect()
    }

    /// Render the grid as text, one line per row, `*` for empty cells
    ///
    /// A display and debugging aid; the search never consults it.
    #[must_use]
    pub fn render(&self) -> String {
        if self.cols == 0 {
            return String::new();
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.unwrap_or('*')).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
