//! Formatting utilities for terminal output

use crate::search::Placement;

/// The marker printed for a word that was not found
pub const NOT_FOUND: &str = "NOT FOUND";

/// Format a placement as `(r1,c1) (r2,c2)`
#[must_use]
pub fn format_placement(placement: &Placement) -> String {
    format!("{} {}", placement.start, placement.end)
}

/// Format one search result: the placement, or the not-found marker
#[must_use]
pub fn format_result(result: &Option<Placement>) -> String {
    result
        .as_ref()
        .map_or_else(|| NOT_FOUND.to_string(), format_placement)
}
