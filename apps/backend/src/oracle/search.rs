//! Fixed-depth negamax with alpha-beta pruning and a material evaluation.

use shakmaty::{Chess, Move, Position, Role};

const MATE: i32 = 100_000;
const INFINITY: i32 = 1_000_000;

fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

/// Material balance from the side to move's point of view.
fn evaluate(pos: &Chess) -> i32 {
    let board = pos.board();
    let us = pos.turn();
    board
        .occupied()
        .into_iter()
        .filter_map(|sq| board.piece_at(sq))
        .map(|piece| {
            let value = piece_value(piece.role);
            if piece.color == us {
                value
            } else {
                -value
            }
        })
        .sum()
}

fn negamax(pos: &Chess, depth: u8, mut alpha: i32, beta: i32, ply: i32) -> i32 {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        // Shorter mates score higher.
        return if pos.is_check() { ply - MATE } else { 0 };
    }
    if depth == 0 {
        return evaluate(pos);
    }

    let mut best = -INFINITY;
    for m in &moves {
        let mut child = pos.clone();
        child.play_unchecked(m);
        let score = -negamax(&child, depth - 1, -beta, -alpha, ply + 1);
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Best move for the side to move, or `None` if there are no legal moves.
/// Ties keep the first move in generation order, so results are deterministic.
pub(super) fn best_move(pos: &Chess, depth: u8) -> Option<Move> {
    let depth = depth.max(1);
    let mut alpha = -INFINITY;
    let mut best = None;

    for m in pos.legal_moves() {
        let mut child = pos.clone();
        child.play_unchecked(&m);
        let score = -negamax(&child, depth - 1, -INFINITY, -alpha, 1);
        if best.is_none() || score > alpha {
            alpha = score;
            best = Some(m);
        }
    }
    best
}
