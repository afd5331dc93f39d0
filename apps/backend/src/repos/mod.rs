//! Typed access to the store keys the game uses.
//!
//! Free functions generic over [`SessionStore`](crate::store::SessionStore);
//! they own key naming and value decoding so services only see domain types.

pub mod rounds;
pub mod sessions;
pub mod wins;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Decodes a stored non-negative counter.
fn parse_counter(key: &str, raw: &str) -> Result<u64, DomainError> {
    raw.trim().parse::<u64>().map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("counter `{key}` holds {raw:?}"),
        )
    })
}

fn counter_from_increment(key: &str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("counter `{key}` went negative: {value}"),
        )
    })
}
