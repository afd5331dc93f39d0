#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod frame;
pub mod infra;
pub mod middleware;
pub mod oracle;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod test_support;
pub mod trace_ctx;

// Re-exports for public API
pub use config::Config;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::VerifiedFrame;
pub use infra::state::build_state;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
