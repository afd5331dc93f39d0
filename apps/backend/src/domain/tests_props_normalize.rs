/// Property-based tests for move normalization
use proptest::prelude::*;

use crate::domain::normalize::{normalize_text, resolve_move};
use crate::domain::{test_gens, test_prelude, LegalMoveSet, Move};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every case/whitespace spelling of a legal move resolves to that move.
    #[test]
    fn prop_spellings_resolve_to_the_move(
        (mv, text) in test_gens::any_move().prop_flat_map(|m| (Just(m), test_gens::spelling_of(m))),
        others in prop::collection::vec(test_gens::any_move(), 0..30),
    ) {
        let legal: LegalMoveSet = others.into_iter().chain(std::iter::once(mv)).collect();
        let resolved = resolve_move(&text, &legal);
        prop_assert_eq!(resolved, Ok(mv), "spelling {:?}", text);
    }

    /// Property: text whose canonical form is outside the set is always rejected.
    #[test]
    fn prop_non_members_are_rejected(
        text in "[ -~]{0,16}",
        moves in prop::collection::vec(test_gens::any_move(), 0..30),
    ) {
        let legal: LegalMoveSet = moves.into_iter().collect();
        let canonical = normalize_text(&text);
        prop_assume!(legal.find_canonical(&canonical).is_none());

        let err = resolve_move(&text, &legal).unwrap_err();
        prop_assert!(err.is_invalid_move());
    }

    /// Property: normalization is idempotent.
    #[test]
    fn prop_normalize_is_idempotent(text in "[ -~]{0,24}") {
        let once = normalize_text(&text);
        prop_assert_eq!(normalize_text(&once), once.clone());
    }

    /// Property: the canonical form of a move is its own normalization.
    #[test]
    fn prop_canonical_is_fixed_point(mv in test_gens::any_move()) {
        let canonical = mv.to_string();
        prop_assert_eq!(normalize_text(&canonical), canonical);
        prop_assert_eq!(Move::from_token(&mv.to_token()), Some(mv));
    }
}
