//! Fake frame verifier and reward trigger.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};
use tokio::sync::mpsc;

use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::frame::{FrameAction, FrameVerifier};
use crate::services::{RewardClaim, RewardTrigger};

/// Origin actix test requests report.
pub const TEST_FRAME_URL: &str = "http://localhost:8080/chess960";

/// Verifier that accepts only message bytes registered up front.
#[derive(Default)]
pub struct StaticVerifier {
    messages: DashMap<String, FrameAction>,
    unreachable: AtomicBool,
}

impl StaticVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `message_bytes` as a valid message carrying `action`.
    pub fn accept(&self, message_bytes: impl Into<String>, action: FrameAction) {
        self.messages.insert(message_bytes.into(), action);
    }

    /// Simulate the hub being down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }
}

#[async_trait]
impl FrameVerifier for StaticVerifier {
    async fn verify(&self, message_bytes: &str) -> Result<Option<FrameAction>, AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AppError::unavailable(
                ErrorCode::UpstreamUnavailable,
                "Frame validation service unreachable",
            ));
        }
        Ok(self.messages.get(message_bytes).map(|a| a.value().clone()))
    }
}

/// Reward trigger that records every claim.
pub struct RecordingRewards {
    tx: mpsc::UnboundedSender<RewardClaim>,
}

/// Receiving side of [`RecordingRewards`].
pub struct RewardLog {
    rx: mpsc::UnboundedReceiver<RewardClaim>,
}

impl RecordingRewards {
    pub fn new() -> (Arc<Self>, RewardLog) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), RewardLog { rx })
    }
}

#[async_trait]
impl RewardTrigger for RecordingRewards {
    async fn issue_reward(&self, claim: &RewardClaim) -> Result<(), AppError> {
        let _ = self.tx.send(claim.clone());
        Ok(())
    }
}

impl RewardLog {
    /// Next claim, waiting briefly for the background dispatch.
    pub async fn next(&mut self) -> Option<RewardClaim> {
        tokio::time::timeout(Duration::from_secs(2), self.rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// True when no claim is pending. Consumes a pending claim.
    pub fn is_empty(&mut self) -> bool {
        self.rx.try_recv().is_err()
    }
}

/// Verified action from fid `fid` posted from the test origin.
pub fn frame_action(fid: u64, button_index: u8, input_text: Option<&str>) -> FrameAction {
    FrameAction {
        fid: PlayerId(fid),
        custody_address: format!("0xcustody{fid}"),
        verified_addresses: vec![format!("0xverified{fid}")],
        button_index,
        input_text: input_text.map(str::to_string),
        url: TEST_FRAME_URL.to_string(),
    }
}

/// Frame post body carrying `message_bytes`.
pub fn frame_body(message_bytes: &str) -> Value {
    json!({
        "untrustedData": {"fid": 0, "url": TEST_FRAME_URL, "buttonIndex": 1},
        "trustedData": {"messageBytes": message_bytes},
    })
}
