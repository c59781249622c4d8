//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` and the caller's `RequestContext` as leading arguments.

pub mod book_repo;

pub use book_repo::BookRepo;

use std::future::Future;

use libris_core::context::RequestContext;

use crate::error::RepoError;

/// Run a storage future under the context's deadline.
///
/// With no deadline set the future runs to completion. When the deadline
/// elapses the future is dropped: sqlx aborts the in-flight statement,
/// returns the connection to the pool (an open transaction rolls back), and
/// the caller observes [`RepoError::Timeout`].
pub(crate) async fn under_deadline<T, F>(ctx: &RequestContext, fut: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, RepoError>>,
{
    match ctx.remaining() {
        Some(remaining) => match tokio::time::timeout(remaining, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(trace_id = %ctx.trace_id(), "storage operation exceeded its deadline");
                Err(RepoError::Timeout)
            }
        },
        None => fut.await,
    }
}
