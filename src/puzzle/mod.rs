//! Puzzle loading
//!
//! Parses the textual puzzle format into a validated [`Puzzle`], keeping
//! all input validation on this side of the boundary so the grid and
//! finder never see malformed data.

mod parser;

pub use parser::{ParseError, Puzzle};
