//! Move value objects and the legal-move set the normalizer checks against.

use std::collections::BTreeSet;
use std::fmt;

use super::square::Square;

/// A transient `{from, to}` pair. Only the board that results from it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// `E2-E4`, the form echoed through `user=` / `cpu=` query parameters.
    pub fn to_token(self) -> String {
        format!("{}-{}", self.from, self.to)
    }

    /// Parses the `FROM-TO` echo form. Anything else yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        let (from, to) = token.split_once('-')?;
        Some(Self {
            from: from.trim().parse().ok()?,
            to: to.trim().parse().ok()?,
        })
    }
}

/// Canonical text form `"<FROM> to <TO>"`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Flattened legal moves for one position, keyed by canonical text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoveSet {
    moves: BTreeSet<Move>,
}

impl LegalMoveSet {
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Looks a move up by its canonical `"<FROM> to <TO>"` text.
    pub fn find_canonical(&self, text: &str) -> Option<Move> {
        self.moves.iter().copied().find(|m| m.to_string() == text)
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl FromIterator<Move> for LegalMoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
