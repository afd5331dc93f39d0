//! Board squares in the uppercase notation frames display (`E2`, `H8`).

use std::fmt;
use std::str::FromStr;

use crate::errors::domain::{DomainError, ValidationKind};

/// A square on the 8x8 board. `file` and `rank` are zero-based (`A1` = 0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    pub fn file_char(self) -> char {
        char::from(b'A' + self.file)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = DomainError;

    /// Accepts `e2` or `E2`; surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DomainError::validation(
                ValidationKind::InvalidSquare,
                format!("'{s}' is not a board square"),
            )
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Square {
            file: file - b'a',
            rank: rank - b'1',
        })
    }
}
