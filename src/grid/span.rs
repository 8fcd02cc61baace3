//! Span generation
//!
//! A span is the ordered sequence of coordinates a word of a given length
//! would occupy, starting at some cell and running in one of the eight
//! directions. All eight directions share one feasibility and
//! materialization routine parameterized by the direction's unit deltas
//! and the two axis bounds.
//!
//! Feasibility rules, per axis the direction moves along:
//! - in any mode, `length` must not exceed that axis's size, otherwise a
//!   wrapped span would revisit a cell;
//! - without wrap, the straight extension from the start must additionally
//!   stay inside the grid.
//!
//! Infeasibility is a normal geometric outcome, reported as `None`, never
//! as an error.

use super::Grid;
use crate::core::{Coord, Direction, Wrap};

/// Whether a `length`-step walk from `start` along `delta` fits one axis.
fn axis_feasible(start: usize, delta: isize, length: usize, size: usize, wrap: Wrap) -> bool {
    if delta == 0 {
        return true;
    }
    if length > size {
        return false;
    }
    if wrap.is_enabled() {
        return true;
    }
    if delta > 0 {
        start + length <= size
    } else {
        // start - length + 1 >= 0, kept in unsigned arithmetic
        start + 1 >= length
    }
}

/// The axis position after `k` steps of `delta`, reduced modulo `size`.
///
/// Uses `rem_euclid` so decrementing walks land on valid coordinates when
/// wrapping past row or column 0. Feasible no-wrap walks never leave the
/// axis, so the reduction is the identity for them.
fn step(origin: usize, delta: isize, k: usize, size: usize) -> usize {
    if delta == 0 || k == 0 {
        return origin;
    }
    (origin as isize + delta * k as isize).rem_euclid(size as isize) as usize
}

impl Grid {
    /// The span of `length` cells from `start` in `direction`, if feasible
    ///
    /// Returns `None` when the geometry rules it out: the word is longer
    /// than the axis it travels (any mode), or it would run off the grid
    /// (no-wrap). Every coordinate of a produced span is in bounds.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::{Coord, Direction, Wrap};
    /// use wordsearch::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec!['A', 'B', 'C'],
    ///     vec!['D', 'E', 'F'],
    ///     vec!['G', 'H', 'I'],
    /// ]).unwrap();
    ///
    /// let span = grid
    ///     .span(Direction::Right, Coord::new(0, 1), 2, Wrap::Disabled)
    ///     .unwrap();
    /// assert_eq!(span, vec![Coord::new(0, 1), Coord::new(0, 2)]);
    ///
    /// // Off the right edge without wrap, around it with.
    /// assert!(grid.span(Direction::Right, Coord::new(0, 2), 2, Wrap::Disabled).is_none());
    /// let wrapped = grid
    ///     .span(Direction::Right, Coord::new(0, 2), 2, Wrap::Enabled)
    ///     .unwrap();
    /// assert_eq!(wrapped, vec![Coord::new(0, 2), Coord::new(0, 0)]);
    /// ```
    #[must_use]
    pub fn span(
        &self,
        direction: Direction,
        start: Coord,
        length: usize,
        wrap: Wrap,
    ) -> Option<Vec<Coord>> {
        let (rows, cols) = self.dimensions();
        let (dr, dc) = direction.deltas();

        if !axis_feasible(start.row, dr, length, rows, wrap)
            || !axis_feasible(start.col, dc, length, cols, wrap)
        {
            return None;
        }

        Some(
            (0..length)
                .map(|k| Coord::new(step(start.row, dr, k, rows), step(start.col, dc, k, cols)))
                .collect(),
        )
    }

    /// All feasible spans of `length` cells from `start`, in scan order
    ///
    /// Directions are tried in [`Direction::ALL`] order; infeasible ones
    /// are omitted rather than yielded as empty spans.
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::{Coord, Wrap};
    /// use wordsearch::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec!['C', 'A', 'T'],
    ///     vec!['N', 'T', 'A'],
    /// ]).unwrap();
    ///
    /// // From the corner only down, right, and right-down fit.
    /// assert_eq!(grid.spans(Coord::new(0, 0), 2, Wrap::Disabled).count(), 3);
    /// // With wrap every direction fits.
    /// assert_eq!(grid.spans(Coord::new(0, 0), 2, Wrap::Enabled).count(), 8);
    /// ```
    pub fn spans(
        &self,
        start: Coord,
        length: usize,
        wrap: Wrap,
    ) -> impl Iterator<Item = Vec<Coord>> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.span(direction, start, length, wrap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid_3x3() -> Grid {
        Grid::from_rows(vec![
            vec!['A', 'B', 'C'],
            vec!['D', 'E', 'F'],
            vec!['G', 'H', 'I'],
        ])
        .unwrap()
    }

    fn grid_2x3() -> Grid {
        Grid::from_rows(vec![vec!['C', 'A', 'T'], vec!['N', 'T', 'A']]).unwrap()
    }

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
        pairs.iter().map(|&(r, c)| Coord::new(r, c)).collect()
    }

    #[test]
    fn up_span_walks_decreasing_rows() {
        let grid = grid_3x3();
        let span = grid
            .span(Direction::Up, Coord::new(2, 1), 3, Wrap::Disabled)
            .unwrap();
        assert_eq!(span, coords(&[(2, 1), (1, 1), (0, 1)]));
    }

    #[test]
    fn up_span_no_wrap_bound() {
        let grid = grid_3x3();
        // start.row - length + 1 < 0
        assert!(
            grid.span(Direction::Up, Coord::new(1, 0), 3, Wrap::Disabled)
                .is_none()
        );
        assert!(
            grid.span(Direction::Up, Coord::new(2, 0), 3, Wrap::Disabled)
                .is_some()
        );
    }

    #[test]
    fn down_span_no_wrap_bound() {
        let grid = grid_3x3();
        // start.row + length > rows
        assert!(
            grid.span(Direction::Down, Coord::new(1, 0), 3, Wrap::Disabled)
                .is_none()
        );
        assert_eq!(
            grid.span(Direction::Down, Coord::new(0, 0), 3, Wrap::Disabled)
                .unwrap(),
            coords(&[(0, 0), (1, 0), (2, 0)])
        );
    }

    #[test]
    fn right_span_no_wrap_bound() {
        let grid = grid_3x3();
        assert!(
            grid.span(Direction::Right, Coord::new(0, 1), 3, Wrap::Disabled)
                .is_none()
        );
        assert_eq!(
            grid.span(Direction::Right, Coord::new(0, 0), 3, Wrap::Disabled)
                .unwrap(),
            coords(&[(0, 0), (0, 1), (0, 2)])
        );
    }

    #[test]
    fn left_span_no_wrap_bound() {
        let grid = grid_3x3();
        assert!(
            grid.span(Direction::Left, Coord::new(0, 1), 3, Wrap::Disabled)
                .is_none()
        );
        assert_eq!(
            grid.span(Direction::Left, Coord::new(0, 2), 3, Wrap::Disabled)
                .unwrap(),
            coords(&[(0, 2), (0, 1), (0, 0)])
        );
    }

    #[test]
    fn diagonal_spans_check_both_axes() {
        let grid = grid_2x3();
        // Length 2 fits both axes from the top-left going right-down.
        assert_eq!(
            grid.span(Direction::RightDown, Coord::new(0, 0), 2, Wrap::Disabled)
                .unwrap(),
            coords(&[(0, 0), (1, 1)])
        );
        // Length 3 exceeds the row axis, in every mode.
        assert!(
            grid.span(Direction::RightDown, Coord::new(0, 0), 3, Wrap::Disabled)
                .is_none()
        );
        assert!(
            grid.span(Direction::RightDown, Coord::new(0, 0), 3, Wrap::Enabled)
                .is_none()
        );
    }

    #[test]
    fn left_down_span_directions() {
        let grid = grid_3x3();
        let span = grid
            .span(Direction::LeftDown, Coord::new(0, 2), 3, Wrap::Disabled)
            .unwrap();
        assert_eq!(span, coords(&[(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn left_up_span_directions() {
        let grid = grid_3x3();
        let span = grid
            .span(Direction::LeftUp, Coord::new(2, 2), 3, Wrap::Disabled)
            .unwrap();
        assert_eq!(span, coords(&[(2, 2), (1, 1), (0, 0)]));
    }

    #[test]
    fn right_up_span_directions() {
        let grid = grid_3x3();
        let span = grid
            .span(Direction::RightUp, Coord::new(2, 0), 3, Wrap::Disabled)
            .unwrap();
        assert_eq!(span, coords(&[(2, 0), (1, 1), (0, 2)]));
    }

    #[test]
    fn length_exceeding_axis_is_infeasible_even_with_wrap() {
        let grid = grid_3x3();
        for direction in Direction::ALL {
            assert!(
                grid.span(direction, Coord::new(0, 0), 4, Wrap::Enabled)
                    .is_none(),
                "{direction:?} must reject length 4 on a 3x3 grid"
            );
        }
    }

    #[test]
    fn wrap_reduces_rows_modulo() {
        let grid = grid_3x3();
        let span = grid
            .span(Direction::Down, Coord::new(2, 0), 3, Wrap::Enabled)
            .unwrap();
        assert_eq!(span, coords(&[(2, 0), (0, 0), (1, 0)]));
    }

    #[test]
    fn wrap_handles_negative_steps() {
        let grid = grid_3x3();
        // Walking up from row 0 must land on the last row, not underflow.
        let span = grid
            .span(Direction::Up, Coord::new(0, 1), 3, Wrap::Enabled)
            .unwrap();
        assert_eq!(span, coords(&[(0, 1), (2, 1), (1, 1)]));

        let span = grid
            .span(Direction::Left, Coord::new(1, 0), 3, Wrap::Enabled)
            .unwrap();
        assert_eq!(span, coords(&[(1, 0), (1, 2), (1, 1)]));
    }

    #[test]
    fn wrap_coordinates_satisfy_modular_formula() {
        let grid = grid_2x3();
        let (rows, cols) = grid.dimensions();
        let start = Coord::new(1, 2);
        for direction in Direction::ALL {
            let (dr, dc) = direction.deltas();
            let Some(span) = grid.span(direction, start, 2, Wrap::Enabled) else {
                continue;
            };
            for (k, coord) in span.iter().enumerate() {
                let row = (start.row as isize + dr * k as isize).rem_euclid(rows as isize);
                let col = (start.col as isize + dc * k as isize).rem_euclid(cols as isize);
                assert_eq!(*coord, Coord::new(row as usize, col as usize));
            }
        }
    }

    #[test]
    fn feasible_spans_have_requested_length_and_distinct_coords() {
        let grid = grid_2x3();
        for wrap in [Wrap::Disabled, Wrap::Enabled] {
            for (start, _) in grid.coordinates_and_letters() {
                for length in 1..=4 {
                    for span in grid.spans(start, length, wrap) {
                        assert_eq!(span.len(), length);
                        let unique: HashSet<_> = span.iter().collect();
                        assert_eq!(unique.len(), length, "span revisits a cell: {span:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn corner_span_counts() {
        let grid = grid_2x3();
        assert_eq!(grid.spans(Coord::new(0, 0), 2, Wrap::Disabled).count(), 3);
        assert_eq!(grid.spans(Coord::new(0, 0), 2, Wrap::Enabled).count(), 8);
    }

    #[test]
    fn spans_follow_scan_order() {
        let grid = grid_3x3();
        let center = Coord::new(1, 1);
        let spans: Vec<_> = grid.spans(center, 2, Wrap::Disabled).collect();
        let expected: Vec<_> = Direction::ALL
            .into_iter()
            .filter_map(|d| grid.span(d, center, 2, Wrap::Disabled))
            .collect();
        assert_eq!(spans, expected);
        // The center of a 3x3 reaches every direction at length 2.
        assert_eq!(spans.len(), 8);
    }

    #[test]
    fn single_cell_spans_collapse_to_start() {
        let grid = grid_3x3();
        let start = Coord::new(1, 2);
        let spans: Vec<_> = grid.spans(start, 1, Wrap::Disabled).collect();
        assert_eq!(spans.len(), 8);
        assert!(spans.iter().all(|span| span == &vec![start]));
    }

    #[test]
    fn spans_are_idempotent() {
        let grid = grid_3x3();
        let first: Vec<_> = grid.spans(Coord::new(0, 2), 3, Wrap::Enabled).collect();
        let second: Vec<_> = grid.spans(Coord::new(0, 2), 3, Wrap::Enabled).collect();
        assert_eq!(first, second);
    }
}
