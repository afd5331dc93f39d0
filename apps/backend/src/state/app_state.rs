use std::sync::Arc;

use crate::frame::{FrameSettings, FrameVerifier};
use crate::oracle::ChessOracle;
use crate::services::{RewardTrigger, TurnFlowService};
use crate::store::SessionStore;

/// Application state containing shared resources.
///
/// Built once at startup and handed to every worker through `web::Data`;
/// the handles are process-wide and need no teardown.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub oracle: Arc<dyn ChessOracle>,
    pub verifier: Arc<dyn FrameVerifier>,
    pub rewards: Arc<dyn RewardTrigger>,
    pub frames: FrameSettings,
    /// Opponent search depth in plies.
    pub search_depth: u8,
}

impl AppState {
    /// Orchestrator over this state's handles.
    pub fn turn_flow(&self) -> TurnFlowService {
        TurnFlowService::new(
            self.store.clone(),
            self.oracle.clone(),
            self.rewards.clone(),
            self.search_depth,
        )
    }
}
