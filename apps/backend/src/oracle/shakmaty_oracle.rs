use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position, Role};

use super::{search, ChessOracle, OracleError};
use crate::domain::{BoardState, LegalMoveSet, Move, Square};

/// Chess960 rules via `shakmaty`. Boards are FEN strings parsed in
/// Chess960 castling mode, so a castle is listed as king square to rook square.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShakmatyOracle;

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self
    }

    fn position(board: &BoardState) -> Result<Chess, OracleError> {
        let fen: Fen = board
            .as_str()
            .parse()
            .map_err(|e| OracleError::InvalidBoard(format!("{e}: {board}")))?;
        fen.into_position(CastlingMode::Chess960)
            .map_err(|e| OracleError::InvalidBoard(format!("{e}: {board}")))
    }

    fn serialize(pos: Chess) -> BoardState {
        BoardState::new(Fen::from_position(pos, EnPassantMode::Legal).to_string())
    }

    /// Engine move matching `mv`; promotions sharing the pair resolve to a queen.
    fn find_move(pos: &Chess, mv: Move) -> Option<shakmaty::Move> {
        let legal = pos.legal_moves();
        let matching: Vec<&shakmaty::Move> =
            legal.iter().filter(|m| to_domain(m) == Some(mv)).collect();

        matching
            .iter()
            .find(|m| m.promotion() == Some(Role::Queen))
            .or_else(|| matching.first())
            .map(|m| (*m).clone())
    }
}

fn square_to_domain(sq: shakmaty::Square) -> Option<Square> {
    sq.to_string().parse().ok()
}

fn to_domain(m: &shakmaty::Move) -> Option<Move> {
    Some(Move::new(square_to_domain(m.from()?)?, square_to_domain(m.to())?))
}

impl ChessOracle for ShakmatyOracle {
    fn legal_moves(&self, board: &BoardState) -> Result<LegalMoveSet, OracleError> {
        let pos = Self::position(board)?;
        Ok(pos.legal_moves().iter().filter_map(to_domain).collect())
    }

    fn apply_move(&self, board: &BoardState, mv: Move) -> Result<BoardState, OracleError> {
        let mut pos = Self::position(board)?;
        let engine_move = Self::find_move(&pos, mv)
            .ok_or_else(|| OracleError::IllegalMove(format!("{mv} in {board}")))?;
        pos.play_unchecked(&engine_move);
        Ok(Self::serialize(pos))
    }

    fn best_reply(&self, board: &BoardState, depth: u8) -> Result<Option<Move>, OracleError> {
        let pos = Self::position(board)?;
        Ok(search::best_move(&pos, depth).as_ref().and_then(to_domain))
    }

    fn is_finished(&self, board: &BoardState) -> Result<bool, OracleError> {
        Ok(Self::position(board)?.legal_moves().is_empty())
    }
}
