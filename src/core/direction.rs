//! The eight search directions
//!
//! Words may run horizontally, vertically, or diagonally, forwards or
//! backwards. Each direction is a unit vector over the 8-neighborhood of a
//! cell; the scan order of [`Direction::ALL`] is the tie-break used when a
//! word matches in more than one direction from the same start cell.

/// One of the eight straight-line directions a word can run in
///
/// Diagonal names read column-then-row: `LeftDown` moves one column left
/// and one row down per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
    LeftDown,
    LeftUp,
    RightUp,
    RightDown,
}

impl Direction {
    /// All eight directions in the fixed scan order
    ///
    /// This order is load-bearing: when a word matches along several
    /// directions from the same start cell, the earliest direction here
    /// wins.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Right,
        Self::Left,
        Self::LeftDown,
        Self::LeftUp,
        Self::RightUp,
        Self::RightDown,
    ];

    /// The per-step `(Δrow, Δcol)` unit vector for this direction
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Direction;
    ///
    /// assert_eq!(Direction::Up.deltas(), (-1, 0));
    /// assert_eq!(Direction::LeftDown.deltas(), (1, -1));
    /// ```
    #[inline]
    #[must_use]
    pub const fn deltas(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::LeftDown => (1, -1),
            Self::LeftUp => (-1, -1),
            Self::RightUp => (-1, 1),
            Self::RightDown => (1, 1),
        }
    }
}
