//! Services: turn orchestration and the reward side effect.

pub mod rewards;
pub mod turn_flow;

pub use rewards::{RewardClaim, RewardTrigger};
pub use turn_flow::{TurnFlowService, TurnRequest};
