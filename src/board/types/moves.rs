//! Move type and move-request parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// An ordered (from, to) pair.
///
/// Moves carry no flags: there is no castling, en passant or promotion, so
/// the two squares are the whole move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Signed row distance (`to.row - from.row`)
    #[inline]
    #[must_use]
    pub const fn row_delta(self) -> isize {
        self.to.0 as isize - self.from.0 as isize
    }

    /// Signed column distance (`to.col - from.col`)
    #[inline]
    #[must_use]
    pub const fn col_delta(self) -> isize {
        self.to.1 as isize - self.from.1 as isize
    }

    /// The same move played backwards.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        Move {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Parses a move request of the form `e2 e4`.
///
/// Exactly one space separates the squares. Leading and trailing whitespace
/// is ignored.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let request = s.trim();
        let bytes = request.as_bytes();
        if bytes.len() != 5 || bytes[2] != b' ' {
            return Err(MoveParseError::InvalidFormat {
                input: request.to_string(),
            });
        }

        let square = |notation: &str| {
            notation
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                })
        };
        let from = square(&request[0..2])?;
        let to = square(&request[3..5])?;
        Ok(Move::new(from, to))
    }
}
