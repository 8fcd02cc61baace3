//! Word Search Solver
//!
//! Finds target words in a rectangular letter grid, searching all eight
//! straight-line directions, with an optional toroidal wrap mode where a
//! word may run off one edge of the grid and continue from the opposite
//! edge.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsearch::core::Wrap;
//! use wordsearch::grid::Grid;
//! use wordsearch::search::Finder;
//!
//! let grid = Grid::from_rows(vec![
//!     vec!['C', 'A', 'T'],
//!     vec!['N', 'T', 'A'],
//! ]).unwrap();
//!
//! let finder = Finder::new(&grid);
//! let placement = finder.find_word("CAT", Wrap::Disabled).unwrap();
//! println!("CAT runs from {} to {}", placement.start, placement.end);
//! ```

// Core domain types
pub mod core;

// The letter grid and span geometry
pub mod grid;

// Word lookup
pub mod search;

// Puzzle text loading
pub mod puzzle;

// Terminal output formatting
pub mod output;
