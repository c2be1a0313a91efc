//! Task-local trace context for web requests.
//!
//! `RequestTrace` scopes every request future with its trace id so code that
//! has no access to the request (notably `AppError::error_response`) can
//! still stamp responses and logs with it.

use tokio::task_local;

/// Value reported outside of any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Get the trace_id for the current task, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trace_id_outside_context() {
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[tokio::test]
    async fn test_trace_id_within_context() {
        let id = "trace-quotes-123".to_string();

        let seen = with_trace_id(id.clone(), async { trace_id() }).await;

        assert_eq!(seen, id);
        assert_eq!(trace_id(), UNKNOWN_TRACE_ID);
    }

    #[tokio::test]
    async fn test_nested_contexts_restore_outer() {
        let outer = "outer".to_string();

        with_trace_id(outer.clone(), async {
            let inner = with_trace_id("inner".to_string(), async { trace_id() }).await;
            assert_eq!(inner, "inner");
            assert_eq!(trace_id(), outer);
        })
        .await;
    }
}
