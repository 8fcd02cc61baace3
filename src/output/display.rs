//! Display functions for solver results

use super::formatters::{NOT_FOUND, format_placement};
use crate::grid::Grid;
use crate::search::Placement;
use colored::Colorize;

/// Print one result line per word: the placement or `NOT FOUND`
///
/// `words` and `results` are expected to be index-aligned, as produced by
/// `Finder::find_words`.
pub fn print_results(words: &[String], results: &[Option<Placement>]) {
    for (word, result) in words.iter().zip(results) {
        match result {
            Some(placement) => {
                println!(
                    "{:>12}  {}",
                    word.bright_black(),
                    format_placement(placement).green()
                );
            }
            None => println!("{:>12}  {}", word.bright_black(), NOT_FOUND.red()),
        }
    }
}

/// Print the grid with a dimension caption
pub fn print_grid(grid: &Grid) {
    let (rows, cols) = grid.dimensions();
    println!("{}", format!("{rows}x{cols} grid:").cyan());
    println!("{}", grid.render());
}
