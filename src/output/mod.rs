//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_results};
pub use formatters::{format_placement, format_result};
