//! Request context extraction.
//!
//! Builds the [`RequestContext`] threaded through service and repository
//! calls from the `x-request-id` header (set by `SetRequestIdLayer`) and the
//! configured storage deadline. Handlers take a [`Ctx`] argument instead of
//! reading trace ids from ambient state.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use libris_core::context::RequestContext;
use uuid::Uuid;

use crate::state::AppState;

/// Extractor wrapper around [`RequestContext`].
pub struct Ctx(pub RequestContext);

impl FromRequestParts<AppState> for Ctx {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let trace_id = parts
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);

        let ctx = RequestContext::new(trace_id).with_timeout(state.config.statement_timeout());
        Ok(Ctx(ctx))
    }
}
