//! Inputs and outcomes of one turn request.

use super::moves::Move;
use super::session::{BoardState, RoundId};

/// Discrete action signal carried by a frame post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// Render the current (possibly freshly seeded) board without mutation.
    Init,
    /// Drop the player's session so it reseeds from the round start.
    Reset,
    /// Raw text from the frame's input field.
    SubmitMove(String),
}

impl TurnAction {
    /// Button 1 resets, button 2 submits; any other button only renders.
    /// The `init` flag wins over the button.
    pub fn from_frame(init: bool, button_index: u8, input_text: Option<&str>) -> Self {
        if init {
            return TurnAction::Init;
        }
        match button_index {
            1 => TurnAction::Reset,
            2 => TurnAction::SubmitMove(input_text.unwrap_or_default().to_string()),
            _ => TurnAction::Init,
        }
    }
}

/// Side that delivered the finishing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The human player.
    White,
    /// The engine.
    Black,
}

/// Moves echoed from the previous frame's query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EchoedMoves {
    pub user: Option<Move>,
    pub cpu: Option<Move>,
}

/// Board produced by a turn that reached the game (not short-circuited).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub round_id: RoundId,
    pub board: BoardState,
    /// Player move applied by this request, if any.
    pub user_move: Option<Move>,
    /// Engine reply applied by this request, if any.
    pub cpu_move: Option<Move>,
    pub winner: Option<Winner>,
}

impl TurnReport {
    /// Move pair to display: this request's moves, else the echoed ones.
    pub fn displayed_moves(&self, echoed: EchoedMoves) -> EchoedMoves {
        EchoedMoves {
            user: self.user_move.or(echoed.user),
            cpu: self.cpu_move.or(echoed.cpu),
        }
    }
}

/// Result of orchestrating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The derived round has no starting state recorded.
    RoundNotFound { round_id: RoundId },
    /// The player already won once; no engine work was done.
    AlreadyRewarded { round_id: RoundId },
    Played(TurnReport),
}

impl TurnOutcome {
    pub fn round_id(&self) -> RoundId {
        match self {
            TurnOutcome::RoundNotFound { round_id } => *round_id,
            TurnOutcome::AlreadyRewarded { round_id } => *round_id,
            TurnOutcome::Played(report) => report.round_id,
        }
    }
}
