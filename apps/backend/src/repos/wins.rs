//! Per-player lifetime win counter. Any value above zero closes the game
//! for that player in every round.

use super::{counter_from_increment, parse_counter};
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;
use crate::store::{keys, SessionStore};

pub async fn count<S: SessionStore + ?Sized>(store: &S, player: PlayerId) -> Result<u64, DomainError> {
    let key = keys::wins(player);
    match store.get(&key).await? {
        Some(raw) => parse_counter(&key, &raw),
        None => Ok(0),
    }
}

/// Returns the count after this win.
pub async fn record<S: SessionStore + ?Sized>(store: &S, player: PlayerId) -> Result<u64, DomainError> {
    let key = keys::wins(player);
    let value = store.increment(&key).await?;
    counter_from_increment(&key, value)
}
