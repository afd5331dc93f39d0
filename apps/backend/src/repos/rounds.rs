//! Round repository: the games-completed counter and each round's start.

use tracing::info;

use super::{counter_from_increment, parse_counter};
use crate::domain::{BoardState, RoundId};
use crate::errors::domain::DomainError;
use crate::store::{keys, SessionStore};

/// Current round id, which is the number of games completed so far.
/// An absent counter means round 0.
pub async fn current_round_id<S: SessionStore + ?Sized>(store: &S) -> Result<RoundId, DomainError> {
    match store.get(keys::GAMES_COMPLETED).await? {
        Some(raw) => Ok(RoundId(parse_counter(keys::GAMES_COMPLETED, &raw)?)),
        None => Ok(RoundId(0)),
    }
}

/// Starting board recorded for `round`, if it was seeded.
pub async fn find_start<S: SessionStore + ?Sized>(
    store: &S,
    round: RoundId,
) -> Result<Option<BoardState>, DomainError> {
    let raw = store.get(&keys::round_start(round)).await?;
    Ok(raw.map(BoardState::new))
}

/// Record the starting board for `round`, replacing any previous one.
pub async fn seed_start<S: SessionStore + ?Sized>(
    store: &S,
    round: RoundId,
    board: &BoardState,
) -> Result<(), DomainError> {
    store.set(&keys::round_start(round), board.as_str()).await?;
    info!(round_id = round.0, board = %board, "Round start seeded");
    Ok(())
}

/// Count one completed game, which advances the current round.
/// Returns the new round id.
pub async fn complete_game<S: SessionStore + ?Sized>(store: &S) -> Result<RoundId, DomainError> {
    let value = store.increment(keys::GAMES_COMPLETED).await?;
    Ok(RoundId(counter_from_increment(keys::GAMES_COMPLETED, value)?))
}
