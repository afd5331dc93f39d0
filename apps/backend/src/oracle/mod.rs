//! Chess rules capability consumed by the turn orchestrator.
//!
//! The orchestrator never inspects a board itself: legality, move
//! application, terminal detection and the engine's reply all go through
//! [`ChessOracle`], so any rules engine can stand behind it.

use std::fmt;

use crate::domain::{BoardState, LegalMoveSet, Move};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};

mod search;
mod shakmaty_oracle;

pub use shakmaty_oracle::ShakmatyOracle;

/// Errors raised by a rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Stored board could not be parsed into a position
    InvalidBoard(String),
    /// Move is not playable in the given position
    IllegalMove(String),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::InvalidBoard(msg) => write!(f, "invalid board: {msg}"),
            OracleError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
        }
    }
}

impl std::error::Error for OracleError {}

impl From<OracleError> for DomainError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::InvalidBoard(_) => {
                DomainError::infra(InfraErrorKind::DataCorruption, err.to_string())
            }
            OracleError::IllegalMove(_) => DomainError::infra(InfraErrorKind::Oracle, err.to_string()),
        }
    }
}

impl From<OracleError> for AppError {
    fn from(err: OracleError) -> Self {
        DomainError::from(err).into()
    }
}

/// Rules engine operations. Implementations are synchronous and CPU-bound.
pub trait ChessOracle: Send + Sync {
    /// Every legal move in `board`, flattened to origin/destination pairs.
    fn legal_moves(&self, board: &BoardState) -> Result<LegalMoveSet, OracleError>;

    /// Board after `mv`. `mv` must come from [`ChessOracle::legal_moves`].
    fn apply_move(&self, board: &BoardState, mv: Move) -> Result<BoardState, OracleError>;

    /// Engine's choice for the side to move, searching `depth` plies.
    /// `None` when the side to move has no legal moves.
    fn best_reply(&self, board: &BoardState, depth: u8) -> Result<Option<Move>, OracleError>;

    /// True when the side to move has no legal moves (checkmate or stalemate).
    fn is_finished(&self, board: &BoardState) -> Result<bool, OracleError> {
        Ok(self.legal_moves(board)?.is_empty())
    }
}
