use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::frame::{FrameSettings, FrameVerifier, NeynarVerifier};
use crate::oracle::{ChessOracle, ShakmatyOracle};
use crate::services::rewards::{DisabledRewards, SyndicateMinter};
use crate::services::turn_flow::DEFAULT_SEARCH_DEPTH;
use crate::services::RewardTrigger;
use crate::state::app_state::AppState;
use crate::store::{MemoryStore, RedisStore, SessionStore};

/// Base URL used when none is supplied; matches actix test requests.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: Option<Arc<dyn SessionStore>>,
    oracle: Option<Arc<dyn ChessOracle>>,
    verifier: Option<Arc<dyn FrameVerifier>>,
    rewards: Option<Arc<dyn RewardTrigger>>,
    base_url: String,
    search_depth: u8,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            oracle: None,
            verifier: None,
            rewards: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_oracle(mut self, oracle: Arc<dyn ChessOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn FrameVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_rewards(mut self, rewards: Arc<dyn RewardTrigger>) -> Self {
        self.rewards = Some(rewards);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    /// Production wiring: Redis (or memory), Neynar, Syndicate (or disabled).
    pub async fn with_config(self, config: &Config) -> Result<Self, AppError> {
        let store: Arc<dyn SessionStore> = match &config.redis_url {
            Some(url) => {
                let store = RedisStore::connect(url, config.store_timeout).await?;
                info!("Session store: redis");
                Arc::new(store)
            }
            None => {
                warn!("REDIS_URL not set; sessions live in process memory and vanish on restart");
                Arc::new(MemoryStore::new())
            }
        };

        let verifier = NeynarVerifier::new(
            config.neynar_validate_url.clone(),
            config.neynar_api_key.clone(),
            config.verify_timeout,
        )?;

        let rewards: Arc<dyn RewardTrigger> = match &config.syndicate_api_key {
            Some(key) => Arc::new(SyndicateMinter::new(
                config.syndicate_mint_url.clone(),
                key.clone(),
                config.reward_timeout,
            )?),
            None => {
                warn!("SYNDICATE_FRAME_API_KEY not set; rewards will be logged and skipped");
                Arc::new(DisabledRewards)
            }
        };

        Ok(self
            .with_store(store)
            .with_verifier(Arc::new(verifier))
            .with_rewards(rewards)
            .with_base_url(config.base_url.clone())
            .with_search_depth(config.search_depth))
    }

    /// Missing store, oracle and rewards default to memory, shakmaty and
    /// disabled. A verifier is required.
    pub fn build(self) -> Result<AppState, AppError> {
        let verifier = self
            .verifier
            .ok_or_else(|| AppError::config("No frame verifier configured"))?;

        Ok(AppState {
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
            oracle: self.oracle.unwrap_or_else(|| Arc::new(ShakmatyOracle::new())),
            verifier,
            rewards: self.rewards.unwrap_or_else(|| Arc::new(DisabledRewards)),
            frames: FrameSettings::new(&self.base_url)?,
            search_depth: self.search_depth,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
