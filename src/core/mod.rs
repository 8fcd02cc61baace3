//! Core domain types for word search
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear geometric properties.

mod coord;
mod direction;
mod wrap;

pub use coord::Coord;
pub use direction::Direction;
pub use wrap::{Wrap, WrapParseError};
