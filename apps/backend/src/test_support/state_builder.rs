use std::sync::Arc;

use super::fakes::{RecordingRewards, RewardLog, StaticVerifier};
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::AppState;
use crate::store::MemoryStore;

/// AppState over fakes, with handles to inspect them.
pub struct TestState {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub verifier: Arc<StaticVerifier>,
    pub rewards: RewardLog,
}

/// Builder for creating test AppState instances
pub struct TestStateBuilder {
    search_depth: u8,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self { search_depth: 2 }
    }

    /// Override the engine search depth (defaults to 2 to keep tests fast).
    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn build(self) -> Result<TestState, AppError> {
        let store = Arc::new(MemoryStore::new());
        let verifier = Arc::new(StaticVerifier::new());
        let (rewards, log) = RecordingRewards::new();

        let state = build_state()
            .with_store(store.clone())
            .with_verifier(verifier.clone())
            .with_rewards(rewards)
            .with_search_depth(self.search_depth)
            .build()?;

        Ok(TestState {
            state,
            store,
            verifier,
            rewards: log,
        })
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new test state builder
///
/// # Example
/// ```rust
/// use tourney_backend::test_support::create_test_state;
///
/// let harness = create_test_state().build().unwrap();
/// assert!(harness.store.snapshot().is_empty());
/// ```
pub fn create_test_state() -> TestStateBuilder {
    TestStateBuilder::new()
}
