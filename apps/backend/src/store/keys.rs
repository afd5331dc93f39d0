//! Key layout shared by the server and the round CLI.

use crate::domain::{PlayerId, RoundId};

/// Global counter; its value is the current round id.
pub const GAMES_COMPLETED: &str = "chess960_games_completed";

/// Starting board of a round.
pub fn round_start(round: RoundId) -> String {
    format!("chess960_game_states:{round}")
}

/// A player's board within a round.
pub fn session(round: RoundId, player: PlayerId) -> String {
    format!("chess960_game_states:{round}:{player}")
}

/// Lifetime win count of a player.
pub fn wins(player: PlayerId) -> String {
    format!("chess960_games_won:{player}")
}
