//! Puzzle text parsing
//!
//! The textual puzzle format, blank lines ignored:
//!
//! ```text
//! <rows> <cols>
//! <rows lines of letters, no separators>
//! WRAP | NO_WRAP
//! <word count>
//! <one word per line>
//! ```
//!
//! The declared dimensions and word count are checked against the parsed
//! data, so downstream code can rely on a well-formed puzzle.

use crate::core::Wrap;
use crate::grid::{Grid, GridError};
use std::fmt;
use std::str::FromStr;

/// A parsed puzzle: the grid, the target words, and the wrap mode
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<String>,
    pub wrap: Wrap,
}

/// Error type for malformed puzzle text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no dimension header line
    MissingHeader,
    /// The header line is not two integers
    BadHeader(String),
    /// The input ended before a `WRAP` / `NO_WRAP` line
    MissingWrapToken,
    /// The input ended before the word count line
    MissingWordCount,
    /// The word count line is not an integer
    BadWordCount(String),
    /// The declared dimensions disagree with the grid block
    ShapeMismatch {
        declared: (usize, usize),
        actual: (usize, usize),
    },
    /// The declared word count disagrees with the word list
    WordCountMismatch { declared: usize, actual: usize },
    /// The grid block itself is malformed
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Input is missing the \"<rows> <cols>\" header"),
            Self::BadHeader(line) => {
                write!(f, "Header must be \"<rows> <cols>\", got {line:?}")
            }
            Self::MissingWrapToken => {
                write!(f, "Input ended before a WRAP or NO_WRAP line")
            }
            Self::MissingWordCount => write!(f, "Input ended before the word count line"),
            Self::BadWordCount(line) => {
                write!(f, "Word count must be an integer, got {line:?}")
            }
            Self::ShapeMismatch { declared, actual } => write!(
                f,
                "Header declares a {}x{} grid but the data is {}x{}",
                declared.0, declared.1, actual.0, actual.1
            ),
            Self::WordCountMismatch { declared, actual } => write!(
                f,
                "Header declares {declared} words but {actual} were listed"
            ),
            Self::Grid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl FromStr for Puzzle {
    type Err = ParseError;

    /// Parse a full puzzle description
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Wrap;
    /// use wordsearch::puzzle::Puzzle;
    ///
    /// let puzzle: Puzzle = "2 3\nCAT\nNTA\nNO_WRAP\n1\nCAT\n".parse().unwrap();
    /// assert_eq!(puzzle.grid.dimensions(), (2, 3));
    /// assert_eq!(puzzle.words, vec!["CAT"]);
    /// assert_eq!(puzzle.wrap, Wrap::Disabled);
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines.next().ok_or(ParseError::MissingHeader)?;
        let declared = parse_header(header)?;

        // Grid rows accumulate until the wrap token line.
        let mut rows: Vec<Vec<char>> = Vec::with_capacity(declared.0);
        let wrap = loop {
            let line = lines.next().ok_or(ParseError::MissingWrapToken)?;
            if let Ok(wrap) = line.parse::<Wrap>() {
                break wrap;
            }
            rows.push(line.chars().collect());
        };

        let grid = Grid::from_rows(rows)?;
        if grid.dimensions() != declared {
            return Err(ParseError::ShapeMismatch {
                declared,
                actual: grid.dimensions(),
            });
        }

        let count_line = lines.next().ok_or(ParseError::MissingWordCount)?;
        let declared_count: usize = count_line
            .parse()
            .map_err(|_| ParseError::BadWordCount(count_line.to_string()))?;

        let words: Vec<String> = lines.map(String::from).collect();
        if words.len() != declared_count {
            return Err(ParseError::WordCountMismatch {
                declared: declared_count,
                actual: words.len(),
            });
        }

        Ok(Self { grid, words, wrap })
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), ParseError> {
    let bad = || ParseError::BadHeader(line.to_string());
    let mut parts = line.split_whitespace();
    let rows = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let cols = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((rows, cols))
}
