//! Error codes for the tourney backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the tourney backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Frame request validation
    /// General bad request error
    BadRequest,
    /// Frame message failed hub validation
    InvalidFrameSignature,
    /// Frame action URL missing or malformed
    InvalidActionUrl,
    /// Frame action URL points at a foreign origin
    OriginMismatch,

    // Move validation
    /// Submitted move is not in the legal move set
    InvalidMove,
    /// Square notation could not be parsed
    InvalidSquare,
    /// General validation error
    ValidationError,

    // System Errors
    /// Session store unreachable
    StoreUnavailable,
    /// Session store call exceeded its timeout
    StoreTimeout,
    /// Stored value could not be decoded
    DataCorruption,
    /// Outbound dependency (hub, minter) unreachable
    UpstreamUnavailable,
    /// Chess engine rejected input it produced itself
    OracleFailure,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidFrameSignature => "INVALID_FRAME_SIGNATURE",
            Self::InvalidActionUrl => "INVALID_ACTION_URL",
            Self::OriginMismatch => "ORIGIN_MISMATCH",

            Self::InvalidMove => "INVALID_MOVE",
            Self::InvalidSquare => "INVALID_SQUARE",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::OracleFailure => "ORACLE_FAILURE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
