//! Task-local trace context for frame requests.
//!
//! `RequestTrace` opens the scope; error rendering and log fields read it
//! back so a Problem Details body and its `x-trace-id` header always agree.

use std::future::Future;

use tokio::task_local;

/// Response header carrying the request's trace id.
pub const TRACE_HEADER: &str = "x-trace-id";

const UNKNOWN: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
