//! Word lookup over a grid
//!
//! The finder shortlists candidate start cells through the grid's letter
//! index, then tests every feasible span from each candidate. Traversal
//! order is fixed (row-major candidates, then [`Direction::ALL`] scan
//! order) and the first match wins, which makes results deterministic when
//! a word fits the grid in several places.
//!
//! [`Direction::ALL`]: crate::core::Direction::ALL

use crate::core::{Coord, Wrap};
use crate::grid::Grid;
use rayon::prelude::*;
use std::fmt;

/// Where a word was found: its first and last cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub start: Coord,
    pub end: Coord,
}

impl Placement {
    #[inline]
    #[must_use]
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// Word finder over a borrowed grid
///
/// All searches are pure functions over the immutable grid, so a finder
/// can be shared and reused freely.
pub struct Finder<'a> {
    grid: &'a Grid,
}

impl<'a> Finder<'a> {
    /// Create a finder for `grid`
    #[inline]
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Find `word` in the grid
    ///
    /// Returns the first placement under the fixed traversal order, or
    /// `None` if the word does not occur (including the empty word). A
    /// missing word is an expected outcome, not an error.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::{Coord, Wrap};
    /// use wordsearch::grid::Grid;
    /// use wordsearch::search::{Finder, Placement};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec!['A', 'B', 'C'],
    ///     vec!['D', 'E', 'F'],
    ///     vec!['G', 'H', 'I'],
    /// ]).unwrap();
    /// let finder = Finder::new(&grid);
    ///
    /// assert_eq!(
    ///     finder.find_word("FED", Wrap::Disabled),
    ///     Some(Placement::new(Coord::new(1, 2), Coord::new(1, 0)))
    /// );
    /// assert_eq!(finder.find_word("CAB", Wrap::Disabled), None);
    /// assert_eq!(
    ///     finder.find_word("CAB", Wrap::Enabled),
    ///     Some(Placement::new(Coord::new(0, 2), Coord::new(0, 1)))
    /// );
    /// ```
    #[must_use]
    pub fn find_word(&self, word: &str, wrap: Wrap) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;

        for start in self.grid.positions_of(first) {
            for span in self.grid.spans(start, letters.len(), wrap) {
                if self.grid.letters_along(&span).eq(letters.iter().copied()) {
                    return Some(Placement::new(span[0], span[span.len() - 1]));
                }
            }
        }
        None
    }

    /// Find every word in `words`, one result per word in input order
    ///
    /// Each word is searched independently; words may overlap and reuse
    /// cells freely.
    #[must_use]
    pub fn find_words(&self, words: &[String], wrap: Wrap) -> Vec<Option<Placement>> {
        words.iter().map(|word| self.find_word(word, wrap)).collect()
    }

    /// [`find_words`](Self::find_words) across worker threads
    ///
    /// Searches are independent pure functions over the shared grid, so
    /// they parallelize without coordination. Results and their order are
    /// identical to the sequential form.
    #[must_use]
    pub fn find_words_parallel(&self, words: &[String], wrap: Wrap) -> Vec<Option<Placement>> {
        words
            .par_iter()
            .map(|word| self.find_word(word, wrap))
            .collect()
    }
}
