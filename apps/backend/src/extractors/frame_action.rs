use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::frame::{check_origin, FrameAction, FrameRequest};
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// Frame posts are a few hundred bytes; anything far larger is not a frame.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// A frame post whose signed message the hub accepted and whose action URL
/// belongs to this host.
///
/// All rejections are 400 Problem Details and happen before any handler
/// code, so no store state is read for a request that fails here.
#[derive(Debug, Clone)]
pub struct VerifiedFrame {
    pub action: FrameAction,
    /// Raw `trustedData.messageBytes`, kept for the reward claim.
    pub message_bytes: String,
}

impl FromRequest for VerifiedFrame {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let mut payload = payload.take();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::internal(ErrorCode::InternalError, "AppState not configured")
                })?;

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Request body too large",
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            let frame: FrameRequest = serde_json::from_slice(&body).map_err(|e| {
                debug!(trace_id = %trace_id, body_size = body.len(), "Frame body parsing failed");
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            if let Some(untrusted) = &frame.untrusted_data {
                debug!(
                    trace_id = %trace_id,
                    claimed_fid = ?untrusted.fid,
                    claimed_button = ?untrusted.button_index,
                    "Verifying frame message"
                );
            }

            let message_bytes = frame.trusted_data.message_bytes;
            let action = state
                .verifier
                .verify(&message_bytes)
                .await?
                .ok_or_else(|| {
                    AppError::bad_request(
                        ErrorCode::InvalidFrameSignature,
                        "Frame message failed validation",
                    )
                })?;

            let request_host = req.connection_info().host().to_string();
            check_origin(&action.url, &request_host, state.frames.base_host())?;

            Ok(VerifiedFrame {
                action,
                message_bytes,
            })
        })
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => "Invalid frame payload: missing or mistyped fields".to_string(),
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
