//! Turn orchestration: one frame action in, one outcome out.
//!
//! Gate on prior wins, load the player's board (seeding from the round
//! start), then dispatch the action. Board writes are always the last store
//! call of a transition, so a failure part-way leaves the session untouched.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::rewards::{self, RewardClaim, RewardTrigger};
use crate::domain::{
    resolve_move, BoardState, Move, Player, RoundId, TurnAction, TurnOutcome, TurnReport, Winner,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::oracle::{ChessOracle, OracleError};
use crate::repos::{rounds, sessions, wins};
use crate::store::SessionStore;

/// Default opponent search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// A verified frame action ready to be played.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub player: Player,
    pub action: TurnAction,
    /// Signed frame message, forwarded with a reward claim.
    pub message_bytes: String,
}

/// Turn orchestrator over the shared store, rules engine and reward trigger.
#[derive(Clone)]
pub struct TurnFlowService {
    store: Arc<dyn SessionStore>,
    oracle: Arc<dyn ChessOracle>,
    rewards: Arc<dyn RewardTrigger>,
    search_depth: u8,
}

/// Board loaded for this request and, when already read, the round start.
struct Loaded {
    board: BoardState,
    round_start: Option<BoardState>,
}

impl TurnFlowService {
    pub fn new(
        store: Arc<dyn SessionStore>,
        oracle: Arc<dyn ChessOracle>,
        rewards: Arc<dyn RewardTrigger>,
        search_depth: u8,
    ) -> Self {
        Self {
            store,
            oracle,
            rewards,
            search_depth,
        }
    }

    pub async fn play_turn(&self, request: TurnRequest) -> Result<TurnOutcome, AppError> {
        let store = self.store.as_ref();
        let player = &request.player;
        let round_id = rounds::current_round_id(store).await?;

        let (session, win_count) = tokio::try_join!(
            sessions::find(store, round_id, player.id),
            wins::count(store, player.id),
        )?;

        // A winner is turned away even when the round was never seeded.
        if win_count > 0 {
            debug!(fid = player.id.0, win_count, "Player already rewarded");
            return Ok(TurnOutcome::AlreadyRewarded { round_id });
        }

        let loaded = match session {
            Some(board) => Loaded {
                board,
                round_start: None,
            },
            None => match rounds::find_start(store, round_id).await? {
                Some(start) => {
                    debug!(round_id = round_id.0, fid = player.id.0, "Seeding session from round start");
                    Loaded {
                        board: start.clone(),
                        round_start: Some(start),
                    }
                }
                None => {
                    info!(round_id = round_id.0, "Round has no starting state");
                    return Ok(TurnOutcome::RoundNotFound { round_id });
                }
            },
        };

        match request.action {
            TurnAction::Init => {
                debug!(round_id = round_id.0, fid = player.id.0, "Transition: -> Init");
                Ok(TurnOutcome::Played(TurnReport {
                    round_id,
                    board: loaded.board,
                    user_move: None,
                    cpu_move: None,
                    winner: None,
                }))
            }
            TurnAction::Reset => self.reset(round_id, player, loaded.round_start).await,
            TurnAction::SubmitMove(text) => {
                self.submit(round_id, player, loaded.board, &text, &request.message_bytes)
                    .await
            }
        }
    }

    async fn reset(
        &self,
        round_id: RoundId,
        player: &Player,
        round_start: Option<BoardState>,
    ) -> Result<TurnOutcome, AppError> {
        let store = self.store.as_ref();
        let start = match round_start {
            Some(start) => start,
            None => match rounds::find_start(store, round_id).await? {
                Some(start) => start,
                None => return Ok(TurnOutcome::RoundNotFound { round_id }),
            },
        };

        sessions::delete(store, round_id, player.id).await?;
        debug!(round_id = round_id.0, fid = player.id.0, "Transition: -> Reset");

        Ok(TurnOutcome::Played(TurnReport {
            round_id,
            board: start,
            user_move: None,
            cpu_move: None,
            winner: None,
        }))
    }

    async fn submit(
        &self,
        round_id: RoundId,
        player: &Player,
        board: BoardState,
        text: &str,
        message_bytes: &str,
    ) -> Result<TurnOutcome, AppError> {
        let store = self.store.as_ref();

        let legal = self.oracle.legal_moves(&board)?;
        let user_move = resolve_move(text, &legal)?;
        let after_user = self
            .oracle
            .apply_move(&board, user_move)
            .map_err(|e| oracle_invariant("player move", user_move, &board, e))?;
        debug!(round_id = round_id.0, fid = player.id.0, user_move = %user_move, "Transition: -> MoveApplied");

        if self.oracle.is_finished(&after_user)? {
            return self
                .finish_player_win(round_id, player, after_user, user_move, message_bytes)
                .await;
        }

        let cpu_move = self.engine_reply(&after_user).await?;
        let after_cpu = self
            .oracle
            .apply_move(&after_user, cpu_move)
            .map_err(|e| oracle_invariant("engine reply", cpu_move, &after_user, e))?;

        let winner = if self.oracle.is_finished(&after_cpu)? {
            info!(round_id = round_id.0, fid = player.id.0, cpu_move = %cpu_move, "Engine won");
            Some(Winner::Black)
        } else {
            debug!(round_id = round_id.0, fid = player.id.0, cpu_move = %cpu_move, "Transition: -> OpponentReplied");
            None
        };

        sessions::save(store, round_id, player.id, &after_cpu).await?;

        Ok(TurnOutcome::Played(TurnReport {
            round_id,
            board: after_cpu,
            user_move: Some(user_move),
            cpu_move: Some(cpu_move),
            winner,
        }))
    }

    /// Counters first, then the reward, then the board write.
    async fn finish_player_win(
        &self,
        round_id: RoundId,
        player: &Player,
        board: BoardState,
        user_move: Move,
        message_bytes: &str,
    ) -> Result<TurnOutcome, AppError> {
        let store = self.store.as_ref();

        let (next_round, win_count) = tokio::try_join!(
            rounds::complete_game(store),
            wins::record(store, player.id),
        )?;
        if win_count > 1 {
            // Concurrent wins by one player can both pass the gate.
            warn!(fid = player.id.0, win_count, "Player won more than once; reward may repeat");
        }

        rewards::dispatch(
            self.rewards.clone(),
            RewardClaim {
                address: player.address.clone(),
                frame_trusted_data: message_bytes.to_string(),
            },
        );

        sessions::save(store, round_id, player.id, &board).await?;
        info!(
            round_id = round_id.0,
            next_round = next_round.0,
            fid = player.id.0,
            "Player won the round"
        );

        Ok(TurnOutcome::Played(TurnReport {
            round_id,
            board,
            user_move: Some(user_move),
            cpu_move: None,
            winner: Some(Winner::White),
        }))
    }

    /// Runs the search on the blocking pool.
    async fn engine_reply(&self, board: &BoardState) -> Result<Move, AppError> {
        let oracle = self.oracle.clone();
        let position = board.clone();
        let depth = self.search_depth;

        let reply = tokio::task::spawn_blocking(move || oracle.best_reply(&position, depth))
            .await
            .map_err(|e| {
                error!(error = %e, "Engine search task failed");
                AppError::internal(ErrorCode::InternalError, "Engine search task failed")
            })??;

        reply.ok_or_else(|| {
            error!(board = %board, "Engine found no reply in an unfinished position");
            AppError::internal(ErrorCode::OracleFailure, "Engine found no reply")
        })
    }
}

/// A move the oracle itself vouched for was rejected: a bug, not a user error.
fn oracle_invariant(stage: &str, mv: Move, board: &BoardState, err: OracleError) -> AppError {
    error!(stage, mv = %mv, board = %board, error = %err, "Oracle rejected its own legal move");
    AppError::internal(
        ErrorCode::OracleFailure,
        format!("Rules engine rejected {stage} {mv}"),
    )
}
