//! Farcaster Frame plumbing: the inbound action payload, its verification,
//! and the meta-tag documents sent back.

pub mod message;
pub mod render;
pub mod verify;
pub mod views;

pub use message::{FrameAction, FrameRequest};
pub use render::{FrameButton, FrameMeta};
pub use verify::{check_origin, FrameVerifier, NeynarVerifier};
pub use views::FrameSettings;
