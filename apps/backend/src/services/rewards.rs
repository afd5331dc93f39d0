//! Reward issuance for a player's win.
//!
//! Dispatch is fire-and-forget: the turn never waits for the mint, and its
//! outcome only reaches the logs.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn, Instrument, Span};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// One reward to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardClaim {
    /// Destination wallet.
    pub address: String,
    /// Signed frame message proving the action, forwarded to the minter.
    pub frame_trusted_data: String,
}

#[async_trait]
pub trait RewardTrigger: Send + Sync {
    async fn issue_reward(&self, claim: &RewardClaim) -> Result<(), AppError>;
}

/// Syndicate frame mint API.
pub struct SyndicateMinter {
    client: reqwest::Client,
    mint_url: String,
    api_key: String,
}

impl SyndicateMinter {
    pub fn new(
        mint_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            mint_url: mint_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl RewardTrigger for SyndicateMinter {
    async fn issue_reward(&self, claim: &RewardClaim) -> Result<(), AppError> {
        let resp = self
            .client
            .post(&self.mint_url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "frameTrustedData": claim.frame_trusted_data,
                "args": [claim.address, 0],
            }))
            .send()
            .await
            .map_err(|e| {
                AppError::unavailable(ErrorCode::UpstreamUnavailable, format!("mint request failed: {e}"))
            })?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::unavailable(
                ErrorCode::UpstreamUnavailable,
                format!("mint API returned {status}"),
            ))
        }
    }
}

/// Used when no mint API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRewards;

#[async_trait]
impl RewardTrigger for DisabledRewards {
    async fn issue_reward(&self, claim: &RewardClaim) -> Result<(), AppError> {
        warn!(address = %claim.address, "Reward minting disabled; skipping");
        Ok(())
    }
}

/// Issue `claim` on a background task carrying the caller's span and trace id.
pub fn dispatch(trigger: Arc<dyn RewardTrigger>, claim: RewardClaim) {
    let trace_id = trace_ctx::trace_id();
    let task = async move {
        match trigger.issue_reward(&claim).await {
            Ok(()) => info!(address = %claim.address, "Reward issued"),
            Err(err) => warn!(address = %claim.address, error = %err, "Reward issuance failed"),
        }
    };
    tokio::spawn(trace_ctx::with_trace_id(trace_id, task).instrument(Span::current()));
}
