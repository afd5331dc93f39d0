//! Frame message verification through a hub validation API, plus the
//! origin check applied to the verified action URL.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use super::message::FrameAction;
use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Validates signed frame messages.
#[async_trait]
pub trait FrameVerifier: Send + Sync {
    /// `Ok(None)` when the hub rejects the message or it carries no action.
    /// `Err` only when the hub could not be asked.
    async fn verify(&self, message_bytes: &str) -> Result<Option<FrameAction>, AppError>;
}

/// Neynar `frame/validate` client.
pub struct NeynarVerifier {
    client: reqwest::Client,
    validate_url: String,
    api_key: String,
}

impl NeynarVerifier {
    pub fn new(
        validate_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            validate_url: validate_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[derive(Serialize)]
struct ValidateRequest<'a> {
    message_bytes_in_hex: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    valid: bool,
    action: Option<ValidatedAction>,
}

#[derive(Debug, Deserialize)]
struct ValidatedAction {
    #[serde(default)]
    url: String,
    interactor: Interactor,
    tapped_button: Option<TappedButton>,
    input: Option<Input>,
}

#[derive(Debug, Deserialize)]
struct Interactor {
    fid: u64,
    #[serde(default)]
    custody_address: String,
    #[serde(default)]
    verifications: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TappedButton {
    index: u8,
}

#[derive(Debug, Deserialize)]
struct Input {
    #[serde(default)]
    text: String,
}

impl ValidateResponse {
    fn into_action(self) -> Option<FrameAction> {
        if !self.valid {
            return None;
        }
        let action = self.action?;
        Some(FrameAction {
            fid: PlayerId(action.interactor.fid),
            custody_address: action.interactor.custody_address,
            verified_addresses: action.interactor.verifications,
            button_index: action.tapped_button.map(|b| b.index).unwrap_or(0),
            input_text: action.input.map(|i| i.text),
            url: action.url,
        })
    }
}

#[async_trait]
impl FrameVerifier for NeynarVerifier {
    async fn verify(&self, message_bytes: &str) -> Result<Option<FrameAction>, AppError> {
        let resp = self
            .client
            .post(&self.validate_url)
            .header("api_key", &self.api_key)
            .json(&ValidateRequest {
                message_bytes_in_hex: message_bytes,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Frame validation request failed");
                AppError::unavailable(
                    ErrorCode::UpstreamUnavailable,
                    "Frame validation service unreachable",
                )
            })?;

        let status = resp.status();
        if status.is_client_error() {
            debug!(status = status.as_u16(), "Hub rejected frame message");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "Frame validation service error");
            return Err(AppError::unavailable(
                ErrorCode::UpstreamUnavailable,
                format!("Frame validation service returned {status}"),
            ));
        }

        let body: ValidateResponse = resp.json().await.map_err(|e| {
            warn!(error = %e, "Unreadable frame validation response");
            AppError::unavailable(
                ErrorCode::UpstreamUnavailable,
                "Frame validation service returned an unreadable response",
            )
        })?;
        Ok(body.into_action())
    }
}

/// `host[:port]` as a browser reports `URL.host` (default ports omitted).
fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Host of a configured base URL, for comparison in [`check_origin`].
pub fn base_authority(base_url: &str) -> Result<String, AppError> {
    Url::parse(base_url)
        .ok()
        .as_ref()
        .and_then(authority)
        .ok_or_else(|| AppError::config(format!("BASE_URL is not an absolute URL: {base_url}")))
}

/// The action must have been posted from a frame served by this host.
pub fn check_origin(action_url: &str, request_host: &str, base_host: &str) -> Result<(), AppError> {
    let url = Url::parse(action_url).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidActionUrl, "Frame action URL is malformed")
    })?;
    let host = authority(&url).ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidActionUrl, "Frame action URL has no host")
    })?;

    if host.eq_ignore_ascii_case(request_host) || host.eq_ignore_ascii_case(base_host) {
        Ok(())
    } else {
        debug!(action_host = %host, request_host, base_host, "Frame origin mismatch");
        Err(AppError::bad_request(
            ErrorCode::OriginMismatch,
            "Frame action was posted from a different origin",
        ))
    }
}
