//! Book entity model and DTOs.

use chrono::NaiveDate;
use libris_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live row from the `books` table.
///
/// `deleted_at` is intentionally absent: every read filters on
/// `deleted_at IS NULL`, so a `Book` value is always a live record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub published: NaiveDate,
    pub isbn: String,
    pub pages: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new book. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub published: NaiveDate,
    pub isbn: String,
    pub pages: i32,
}

/// DTO for updating an existing book.
///
/// All fields are optional; `None` means "leave unchanged". There is no way
/// to clear a field, since every column is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published: Option<NaiveDate>,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
}

/// One page of live books plus the total live count, produced under a single
/// read snapshot so `total` is consistent with `books`.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total: i64,
}
