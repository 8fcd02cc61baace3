//! Toroidal addressing mode
//!
//! With wrap enabled a span may run off one edge of the grid and continue
//! from the opposite edge. The puzzle text selects the mode with the
//! `WRAP` / `NO_WRAP` token, which [`Wrap`] parses and displays.

use std::fmt;
use std::str::FromStr;

/// Whether spans may wrap around the grid edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrap {
    Enabled,
    Disabled,
}

/// Error type for an unrecognized wrap token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapParseError(String);

impl fmt::Display for WrapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrap mode must be \"WRAP\" or \"NO_WRAP\", got {:?}",
            self.0
        )
    }
}

impl std::error::Error for WrapParseError {}

impl Wrap {
    /// Whether toroidal addressing is on
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl FromStr for Wrap {
    type Err = WrapParseError;

    /// Parse the puzzle-text token, exactly `WRAP` or `NO_WRAP`
    ///
    /// # Examples
    /// ```
    /// use wordsearch::core::Wrap;
    ///
    /// assert_eq!("WRAP".parse::<Wrap>(), Ok(Wrap::Enabled));
    /// assert_eq!("NO_WRAP".parse::<Wrap>(), Ok(Wrap::Disabled));
    /// assert!("wrap".parse::<Wrap>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WRAP" => Ok(Self::Enabled),
            "NO_WRAP" => Ok(Self::Disabled),
            other => Err(WrapParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "WRAP"),
            Self::Disabled => write!(f, "NO_WRAP"),
        }
    }
}
