//! Test harness shared by unit and integration tests: in-memory state with
//! fake collaborators, and an actix test service over the real routes.

pub mod app_builder;
pub mod fakes;
pub mod state_builder;

pub use app_builder::create_test_app;
pub use fakes::{frame_action, frame_body, RecordingRewards, RewardLog, StaticVerifier};
pub use state_builder::{create_test_state, TestState};
