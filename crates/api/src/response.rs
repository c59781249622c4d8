//! Shared response types for API handlers.

use libris_db::models::book::Book;
use serde::Serialize;

/// Paginated list response: the page slice plus the pagination actually
/// applied (after clamping) and the total live-record count.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub data: Vec<Book>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}
