//! Task-local trace id for the request being served.
//!
//! `RequestTrace` runs the downstream service inside [`with_trace_id`], so
//! error bodies built deep inside handlers can report the same id the
//! middleware puts in the `x-trace-id` header.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// The trace id of the current request, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` installed as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
