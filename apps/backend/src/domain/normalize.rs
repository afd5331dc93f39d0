//! Free-text move input → canonical `"<FROM> to <TO>"`.
//!
//! Lower-case the input, split on the literal `to`, trim and upper-case each
//! side, rejoin with `" to "`. The result must match an entry of the legal
//! move set exactly; there is no fuzzy or piece-prefixed notation.

use tracing::debug;

use super::moves::{LegalMoveSet, Move};
use crate::errors::domain::DomainError;

/// Canonical text for `input`; does not check legality.
pub fn normalize_text(input: &str) -> String {
    input
        .to_lowercase()
        .split("to")
        .map(|side| side.trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(" to ")
}

/// Normalizes `input` and resolves it against `legal`.
///
/// Fails with an invalid-move validation error when the canonical text is
/// not a member of the set.
pub fn resolve_move(input: &str, legal: &LegalMoveSet) -> Result<Move, DomainError> {
    let canonical = normalize_text(input);

    match legal.find_canonical(&canonical) {
        Some(mv) => Ok(mv),
        None => {
            debug!(input, canonical = %canonical, legal = legal.len(), "Rejected move");
            Err(DomainError::invalid_move(format!(
                "'{canonical}' is not a legal move"
            )))
        }
    }
}
