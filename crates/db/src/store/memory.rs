//! In-memory implementation of the book store contract.
//!
//! Used by service-level tests that do not need a database. Mirrors the SQL
//! backend's semantics: storage-assigned ids and timestamps, ISBN uniqueness
//! among live rows only, soft delete, and `created_at`-descending listing
//! with insertion order preserved for ties.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use libris_core::context::RequestContext;
use libris_core::pagination;
use libris_core::types::{DbId, Timestamp};

use crate::error::RepoError;
use crate::models::book::{Book, BookPage, CreateBook};

/// A stored row; `deleted_at` marks it logically absent.
#[derive(Debug, Clone)]
struct StoredBook {
    book: Book,
    deleted_at: Option<Timestamp>,
}

impl StoredBook {
    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<StoredBook>,
    next_id: DbId,
}

/// Cheaply cloneable in-memory store; clones share the same rows.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Honor an already-elapsed deadline so timeout behaviour is testable
    /// without a database.
    fn check_deadline(ctx: &RequestContext) -> Result<(), RepoError> {
        match ctx.remaining() {
            Some(Duration::ZERO) => Err(RepoError::Timeout),
            _ => Ok(()),
        }
    }

    pub fn create(&self, ctx: &RequestContext, input: &CreateBook) -> Result<Book, RepoError> {
        Self::check_deadline(ctx)?;
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if inner
            .rows
            .iter()
            .any(|r| r.is_live() && r.book.isbn == input.isbn)
        {
            return Err(RepoError::DuplicateIsbn);
        }

        let now = Utc::now();
        let book = Book {
            id: inner.next_id,
            title: input.title.clone(),
            author: input.author.clone(),
            published: input.published,
            isbn: input.isbn.clone(),
            pages: input.pages,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.rows.push(StoredBook {
            book: book.clone(),
            deleted_at: None,
        });
        Ok(book)
    }

    pub fn find_by_id(&self, ctx: &RequestContext, id: DbId) -> Result<Book, RepoError> {
        Self::check_deadline(ctx)?;
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .rows
            .iter()
            .find(|r| r.is_live() && r.book.id == id)
            .map(|r| r.book.clone())
            .ok_or(RepoError::NotFound)
    }

    pub fn list(
        &self,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> Result<BookPage, RepoError> {
        Self::check_deadline(ctx)?;
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let mut live: Vec<&StoredBook> = inner.rows.iter().filter(|r| r.is_live()).collect();
        let total = live.len() as i64;

        // Stable sort keeps insertion order for equal timestamps, matching
        // the SQL backend's natural row order.
        live.sort_by(|a, b| b.book.created_at.cmp(&a.book.created_at));

        let offset = pagination::offset(page, page_size) as usize;
        let books = live
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .map(|r| r.book.clone())
            .collect();

        Ok(BookPage { books, total })
    }

    pub fn update(&self, ctx: &RequestContext, book: &Book) -> Result<Book, RepoError> {
        Self::check_deadline(ctx)?;
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if inner
            .rows
            .iter()
            .any(|r| r.is_live() && r.book.id != book.id && r.book.isbn == book.isbn)
        {
            return Err(RepoError::DuplicateIsbn);
        }

        let row = inner
            .rows
            .iter_mut()
            .find(|r| r.is_live() && r.book.id == book.id)
            .ok_or(RepoError::NotFound)?;

        row.book = Book {
            id: row.book.id,
            created_at: row.book.created_at,
            updated_at: Utc::now(),
            title: book.title.clone(),
            author: book.author.clone(),
            published: book.published,
            isbn: book.isbn.clone(),
            pages: book.pages,
        };
        Ok(row.book.clone())
    }

    pub fn soft_delete(&self, ctx: &RequestContext, id: DbId) -> Result<(), RepoError> {
        Self::check_deadline(ctx)?;
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let row = inner
            .rows
            .iter_mut()
            .find(|r| r.is_live() && r.book.id == id)
            .ok_or(RepoError::NotFound)?;

        row.deleted_at = Some(Utc::now());
        Ok(())
    }
}
