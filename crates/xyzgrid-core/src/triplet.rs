//! XYZ token decoding.
//!
//! An XYZ token is exactly three digit characters: `X` is the row (0-8), `Y`
//! the column (0-8) and `Z` the value (1-9). Tokens are separated by any
//! whitespace.
//!
//! ```
//! use xyzgrid_core::{Digit, Position, Triplet, TokenError, parse_tokens};
//!
//! let triplet: Triplet = "305".parse().unwrap();
//! assert_eq!(triplet.position(), Position::new(3, 0));
//! assert_eq!(triplet.digit(), Digit::D5);
//!
//! assert!(matches!("12".parse::<Triplet>(), Err(TokenError::InvalidLength { .. })));
//!
//! let loaded = parse_tokens("001 12 999 \n 115");
//! assert_eq!(loaded.grid.filled_count(), 2);
//! assert_eq!(loaded.rejected.len(), 2);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Grid, Position};

/// A decoded `(row, column, value)` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet {
    position: Position,
    digit: Digit,
}

impl Triplet {
    /// Creates a triplet placing `digit` at `position`.
    #[must_use]
    pub const fn new(position: Position, digit: Digit) -> Self {
        Self { position, digit }
    }

    /// Target cell.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Value to place.
    #[must_use]
    pub const fn digit(self) -> Digit {
        self.digit
    }
}

/// Formats the triplet back into its three-character token.
impl Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.position.row(),
            self.position.col(),
            self.digit
        )
    }
}

/// Reasons a token is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TokenError {
    /// The token is not exactly three characters long.
    #[display("invalid format, expected XYZ ({len} characters)")]
    InvalidLength {
        /// Length of the token in characters.
        len: usize,
    },
    /// One of the three characters is not a decimal digit.
    #[display("invalid format, {ch:?} is not a digit")]
    NonDigit {
        /// The offending character.
        ch: char,
    },
    /// The digits decode to a row or column outside 0-8 or a value outside 1-9.
    #[display("triplet out of bounds (row {row}, column {col}, value {value})")]
    OutOfBounds {
        /// Decoded row.
        row: u8,
        /// Decoded column.
        col: u8,
        /// Decoded value.
        value: u8,
    },
}

impl FromStr for Triplet {
    type Err = TokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = token.chars().collect();
        let &[x, y, z] = chars.as_slice() else {
            return Err(TokenError::InvalidLength { len: chars.len() });
        };
        let [row, col, value] = [x, y, z].map(decimal);
        let (row, col, value) = (row?, col?, value?);

        Position::try_new(row, col)
            .zip(Digit::try_from_value(value))
            .map(|(position, digit)| Self::new(position, digit))
            .ok_or(TokenError::OutOfBounds { row, col, value })
    }
}

fn decimal(ch: char) -> Result<u8, TokenError> {
    ch.to_digit(10)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or(TokenError::NonDigit { ch })
}

/// A token that [`parse_tokens`] skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedToken {
    /// The token text as it appeared in the input.
    pub token: String,
    /// Why it was skipped.
    pub error: TokenError,
}

impl Display for RejectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.error)
    }
}

/// Result of decoding a whole token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// Grid holding every accepted triplet.
    pub grid: Grid,
    /// Tokens that were skipped, in input order.
    pub rejected: Vec<RejectedToken>,
}

/// Decodes whitespace-separated XYZ tokens into a grid.
///
/// Malformed tokens never abort decoding: each one is logged at `warn` level
/// and recorded in [`Loaded::rejected`]. When several tokens target the same
/// cell, the last one wins.
#[must_use]
pub fn parse_tokens(input: &str) -> Loaded {
    let mut grid = Grid::new();
    let mut rejected = Vec::new();

    for token in input.split_whitespace() {
        match token.parse::<Triplet>() {
            Ok(triplet) => {
                if let Some(previous) = grid.apply(triplet) {
                    log::debug!(
                        "cell {} overwritten: {previous} -> {}",
                        triplet.position(),
                        triplet.digit()
                    );
                }
            }
            Err(error) => {
                log::warn!("skipping token {token:?}: {error}");
                rejected.push(RejectedToken {
                    token: token.to_owned(),
                    error,
                });
            }
        }
    }

    log::debug!(
        "decoded {} cells, skipped {} tokens",
        grid.filled_count(),
        rejected.len()
    );
    Loaded { grid, rejected }
}
