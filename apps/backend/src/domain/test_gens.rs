// Proptest generators for squares, moves and free-text move spellings.

use proptest::prelude::*;

use crate::domain::{Move, Square};

/// Any square on the board.
pub fn square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(file, rank)| Square::new(file, rank).unwrap())
}

/// Any from/to pair, including nonsensical ones (same square, etc).
pub fn any_move() -> impl Strategy<Value = Move> {
    (square(), square()).prop_map(|(from, to)| Move::new(from, to))
}

/// Runs of spaces and tabs, possibly empty.
pub fn padding() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t')], 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Re-cases each character of `text` according to `mask`.
pub fn recase(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// A spelling of `mv` a player might type: random case, random padding
/// around each square and around the `to` separator.
pub fn spelling_of(mv: Move) -> impl Strategy<Value = String> {
    let mask = || prop::collection::vec(any::<bool>(), 1..4);
    (
        (mask(), mask(), mask()),
        (padding(), padding(), padding(), padding()),
    )
        .prop_map(move |((m_from, m_sep, m_to), (p0, p1, p2, p3))| {
            let from = recase(&mv.from.to_string(), &m_from);
            let sep = recase("to", &m_sep);
            let to = recase(&mv.to.to_string(), &m_to);
            format!("{p0}{from}{p1}{sep}{p2}{to}{p3}")
        })
}
