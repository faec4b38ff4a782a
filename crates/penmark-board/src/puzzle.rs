//! Puzzle input parsing.

use std::{fmt, str::FromStr};

use penmark_core::Digit;

/// The default board used when no puzzle could be loaded.
///
/// Malformed catalog input falls back to this rather than leaving the board
/// partially constructed.
const DEFAULT_BOARD: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const DEFAULT_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// An opaque puzzle identifier, used only for solved-puzzle tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub struct PuzzleId(pub String);

impl From<&str> for PuzzleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A complete 81-digit solution grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution([Digit; 81]);

impl Solution {
    /// Returns the solution digit for cell `index` (0-80).
    #[must_use]
    pub fn digit(&self, index: usize) -> Digit {
        self.0[index]
    }
}

impl FromStr for Solution {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 81 {
            return Err(ParsePuzzleError::BadLength { len: s.chars().count() });
        }
        let mut digits = [Digit::D1; 81];
        for (i, ch) in s.chars().enumerate() {
            digits[i] = Digit::from_char(ch).ok_or(ParsePuzzleError::BadSymbol { ch })?;
        }
        Ok(Self(digits))
    }
}

/// A parsed puzzle: 81 optional givens, an optional solution grid, and an
/// optional identifier.
///
/// The board string uses `'1'..='9'` for clues and `'0'` or `'.'` for
/// blanks.
///
/// # Examples
///
/// ```
/// use penmark_board::Puzzle;
///
/// let puzzle: Puzzle = format!("53..7....{}", ".".repeat(72)).parse().unwrap();
/// assert_eq!(puzzle.givens.iter().filter(|g| g.is_some()).count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The clue layout, row-major.
    pub givens: [Option<Digit>; 81],
    /// The reference solution, when the catalog provides one.
    pub solution: Option<Solution>,
    /// Identifier for solved-puzzle tracking.
    pub id: Option<PuzzleId>,
}

impl Puzzle {
    /// Parses a board string plus an optional solution string.
    ///
    /// An empty solution string counts as absent, matching catalog entries
    /// that omit solutions.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePuzzleError`] if either string has the wrong length or
    /// contains a symbol outside `0-9` / `.`.
    pub fn parse(
        board: &str,
        solution: Option<&str>,
        id: Option<PuzzleId>,
    ) -> Result<Self, ParsePuzzleError> {
        let mut puzzle: Self = board.parse()?;
        puzzle.solution = match solution {
            None | Some("") => None,
            Some(s) => Some(s.parse()?),
        };
        puzzle.id = id;
        Ok(puzzle)
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 81 {
            return Err(ParsePuzzleError::BadLength { len: s.chars().count() });
        }
        let mut givens = [None; 81];
        for (i, ch) in s.chars().enumerate() {
            givens[i] = match ch {
                '0' | '.' => None,
                _ => Some(Digit::from_char(ch).ok_or(ParsePuzzleError::BadSymbol { ch })?),
            };
        }
        Ok(Self {
            givens,
            solution: None,
            id: None,
        })
    }
}

impl Default for Puzzle {
    /// The hardcoded fallback puzzle.
    fn default() -> Self {
        Self::parse(DEFAULT_BOARD, Some(DEFAULT_SOLUTION), None)
            .unwrap_or_else(|_| unreachable!("default puzzle strings are well-formed"))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for given in &self.givens {
            match given {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a puzzle or solution string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The string is not exactly 81 characters.
    #[display("expected 81 characters, got {len}")]
    BadLength {
        /// Actual character count.
        len: usize,
    },
    /// The string contains a character outside the accepted alphabet.
    #[display("invalid puzzle symbol: {ch:?}")]
    BadSymbol {
        /// The offending character.
        ch: char,
    },
}
