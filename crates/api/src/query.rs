//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`).
///
/// Out-of-range values are clamped by the service layer, never rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
