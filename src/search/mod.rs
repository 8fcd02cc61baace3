//! Word search over a grid

mod finder;

pub use finder::{Finder, Placement};
