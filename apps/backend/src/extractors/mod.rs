pub mod frame_action;

pub use frame_action::VerifiedFrame;
