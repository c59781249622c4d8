//! Explicit per-request context.
//!
//! Every service and repository operation receives a [`RequestContext`]
//! instead of reading trace ids or deadlines from ambient state. The trace id
//! originates from the `x-request-id` header set by the HTTP middleware; the
//! deadline bounds every storage call made on behalf of the request.

use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

/// Trace id plus optional deadline, threaded through every call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: Uuid,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Create a context with the given trace id and no deadline.
    pub fn new(trace_id: Uuid) -> Self {
        Self {
            trace_id,
            deadline: None,
        }
    }

    /// Create a context with a fresh trace id and no deadline.
    ///
    /// Intended for tests and background work that is not tied to an
    /// incoming request.
    pub fn background() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Return a copy of this context whose deadline is `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            ..self
        }
    }

    pub fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// Time remaining until the deadline.
    ///
    /// Returns `None` when no deadline is set. An already-elapsed deadline
    /// yields `Some(Duration::ZERO)`, so callers time out immediately rather
    /// than issuing a doomed storage call.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
}
