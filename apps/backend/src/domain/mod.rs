//! Domain layer: pure move, session and turn types.

pub mod chess960;
pub mod moves;
pub mod normalize;
pub mod session;
pub mod square;
pub mod turn;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_normalize;

// Re-exports for ergonomics
pub use moves::{LegalMoveSet, Move};
pub use normalize::{normalize_text, resolve_move};
pub use session::{BoardState, Player, PlayerId, RoundId};
pub use square::Square;
pub use turn::{EchoedMoves, TurnAction, TurnOutcome, TurnReport, Winner};
