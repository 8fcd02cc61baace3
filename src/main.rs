//! Word Search Solver - CLI
//!
//! Reads a puzzle file (grid, wrap mode, word list), solves it, and prints
//! one result line per word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wordsearch::{
    output::{print_grid, print_results},
    puzzle::Puzzle,
    search::Finder,
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Word search puzzle solver with eight-direction and wrap-around matching",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file and print where each word was found
    Solve {
        /// Path to the puzzle file
        file: PathBuf,

        /// Print the parsed grid before the results
        #[arg(short = 'g', long)]
        show_grid: bool,

        /// Search the words across worker threads
        #[arg(short, long)]
        parallel: bool,
    },

    /// Parse a puzzle file and print its grid and word list
    Show {
        /// Path to the puzzle file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            show_grid,
            parallel,
        } => run_solve(&file, show_grid, parallel),
        Commands::Show { file } => run_show(&file),
    }
}

fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read puzzle file {}", path.display()))?;
    text.parse()
        .with_context(|| format!("Failed to parse puzzle file {}", path.display()))
}

fn run_solve(path: &Path, show_grid: bool, parallel: bool) -> Result<()> {
    let puzzle = load_puzzle(path)?;

    if show_grid {
        print_grid(&puzzle.grid);
        println!();
    }

    let finder = Finder::new(&puzzle.grid);
    let results = if parallel {
        finder.find_words_parallel(&puzzle.words, puzzle.wrap)
    } else {
        finder.find_words(&puzzle.words, puzzle.wrap)
    };

    print_results(&puzzle.words, &results);
    Ok(())
}

fn run_show(path: &Path) -> Result<()> {
    let puzzle = load_puzzle(path)?;

    print_grid(&puzzle.grid);
    println!("\nMode: {}", puzzle.wrap);
    println!("Words ({}):", puzzle.words.len());
    for word in &puzzle.words {
        println!("  {word}");
    }
    Ok(())
}
