//! Identifiers and persisted values for rounds and player sessions.

use std::fmt;

/// Tournament round id, derived from the global games-completed counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Farcaster id of the interacting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serialized board (FEN). Opaque to everything except the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState(String);

impl BoardState {
    pub fn new(fen: impl Into<String>) -> Self {
        Self(fen.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who the interacting player is, as established by frame verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Reward destination: first verified address, else custody address.
    pub address: String,
}
