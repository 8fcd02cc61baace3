//! Grid coordinates
//!
//! A `Coord` addresses a single cell by 0-based row and column.

use std::fmt;

/// A 0-based (row, column) cell address
///
/// Row 0 is the top row; column 0 is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Coord;
    ///
    /// let c = Coord::new(1, 2);
    /// assert_eq!(c.row, 1);
    /// assert_eq!(c.col, 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
