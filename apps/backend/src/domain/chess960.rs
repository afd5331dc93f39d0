//! Chess960 starting positions from the standard 0..959 numbering.
//!
//! Bishops, queen and knights are placed by successive division of the
//! index; rook, king, rook fill the three remaining files left to right.

use super::session::BoardState;

pub const POSITION_COUNT: u16 = 960;

/// Index of the classical `RNBQKBNR` setup.
pub const CLASSICAL_POSITION: u16 = 518;

/// Knight file pairs over the five files left after bishops and queen.
const KNIGHT_PAIRS: [(usize, usize); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

/// White back rank from file A to file H, e.g. `RNBQKBNR`.
pub fn back_rank(index: u16) -> Option<[char; 8]> {
    if index >= POSITION_COUNT {
        return None;
    }

    let mut rank = [' '; 8];
    let mut n = usize::from(index);

    // Light-squared bishop on b/d/f/h, dark-squared on a/c/e/g.
    rank[n % 4 * 2 + 1] = 'B';
    n /= 4;
    rank[n % 4 * 2] = 'B';
    n /= 4;

    place_on_empty(&mut rank, n % 6, 'Q');
    n /= 6;

    let (first, second) = KNIGHT_PAIRS[n];
    // Place the later knight first so the earlier empty index stays valid.
    place_on_empty(&mut rank, second, 'N');
    place_on_empty(&mut rank, first, 'N');

    for piece in ['R', 'K', 'R'] {
        place_on_empty(&mut rank, 0, piece);
    }

    Some(rank)
}

fn place_on_empty(rank: &mut [char; 8], nth_empty: usize, piece: char) {
    if let Some(slot) = rank.iter_mut().filter(|c| **c == ' ').nth(nth_empty) {
        *slot = piece;
    }
}

/// Starting FEN for `index`, castling rights in rook-file (Shredder) form.
pub fn starting_position(index: u16) -> Option<BoardState> {
    let white: String = back_rank(index)?.iter().collect();
    let black = white.to_lowercase();

    let king = white.find('K')?;
    let files: Vec<char> = white
        .char_indices()
        .filter(|(_, c)| *c == 'R')
        .map(|(i, _)| char::from(b'A' + i as u8))
        .collect();
    let (queen_side, king_side) = match files.as_slice() {
        [q, k] if (*q as usize - 'A' as usize) < king => (*q, *k),
        _ => return None,
    };
    let castling = format!(
        "{king_side}{queen_side}{}{}",
        king_side.to_ascii_lowercase(),
        queen_side.to_ascii_lowercase()
    );

    Some(BoardState::new(format!(
        "{black}/pppppppp/8/8/8/8/PPPPPPPP/{white} w {castling} - 0 1"
    )))
}
