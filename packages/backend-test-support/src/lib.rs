//! Backend test support utilities
//!
//! Shared by the backend's integration test binaries: idempotent logging
//! initialization and assertions over the Problem Details error contract.

pub mod logging;
pub mod problem_details;

pub use problem_details::{
    assert_problem_details_from_parts, assert_problem_details_from_service_response,
    PROBLEM_TYPE_PREFIX,
};
