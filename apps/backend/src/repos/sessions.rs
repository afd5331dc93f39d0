//! Player session repository: one board per (round, player).

use crate::domain::{BoardState, PlayerId, RoundId};
use crate::errors::domain::DomainError;
use crate::store::{keys, SessionStore};

pub async fn find<S: SessionStore + ?Sized>(
    store: &S,
    round: RoundId,
    player: PlayerId,
) -> Result<Option<BoardState>, DomainError> {
    let raw = store.get(&keys::session(round, player)).await?;
    Ok(raw.map(BoardState::new))
}

/// Last writer wins.
pub async fn save<S: SessionStore + ?Sized>(
    store: &S,
    round: RoundId,
    player: PlayerId,
    board: &BoardState,
) -> Result<(), DomainError> {
    store
        .set(&keys::session(round, player), board.as_str())
        .await?;
    Ok(())
}

pub async fn delete<S: SessionStore + ?Sized>(
    store: &S,
    round: RoundId,
    player: PlayerId,
) -> Result<(), DomainError> {
    store.delete(&keys::session(round, player)).await?;
    Ok(())
}
