//! Inbound frame action payload and its verified form.

use serde::Deserialize;

use crate::domain::{Player, PlayerId};

/// Body of a frame button post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Client-reported fields. Never trusted; kept for logging only.
    #[serde(default)]
    pub untrusted_data: Option<UntrustedData>,
    pub trusted_data: TrustedData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    pub fid: Option<u64>,
    pub url: Option<String>,
    pub button_index: Option<u8>,
    pub input_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedData {
    /// Hex-encoded signed message, forwarded verbatim to the hub and the minter.
    pub message_bytes: String,
}

/// What the hub vouches for after validating `messageBytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAction {
    pub fid: PlayerId,
    pub custody_address: String,
    pub verified_addresses: Vec<String>,
    pub button_index: u8,
    pub input_text: Option<String>,
    /// Frame URL the action was posted from.
    pub url: String,
}

impl FrameAction {
    /// Rewards go to the first verified address, else the custody address.
    pub fn player(&self) -> Player {
        let address = self
            .verified_addresses
            .first()
            .cloned()
            .unwrap_or_else(|| self.custody_address.clone());
        Player {
            id: self.fid,
            address,
        }
    }
}
