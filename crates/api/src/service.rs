//! Business rules for the book catalog.
//!
//! [`BookService`] validates and normalizes input before any storage call,
//! applies the partial-merge update semantics, clamps pagination, and maps
//! repository errors into the service-level [`CoreError`] taxonomy. It holds
//! a [`BookStore`] and is oblivious to which backend is behind it.

use libris_core::book as rules;
use libris_core::context::RequestContext;
use libris_core::error::CoreError;
use libris_core::pagination;
use libris_core::types::DbId;
use libris_db::error::RepoError;
use libris_db::models::book::{Book, BookPage, CreateBook, UpdateBook};
use libris_db::store::BookStore;

/// One page of catalog results, with the pagination actually applied after
/// clamping and the total live-record count from the same read snapshot.
#[derive(Debug)]
pub struct BookListing {
    pub books: Vec<Book>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

/// Storage-agnostic catalog operations.
#[derive(Clone)]
pub struct BookService {
    store: BookStore,
}

impl BookService {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Create a book.
    ///
    /// All field contracts are checked up front, so a validation failure
    /// leaves no partial side effects. An ISBN collision with a live record
    /// surfaces as [`CoreError::Conflict`].
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateBook,
    ) -> Result<Book, CoreError> {
        rules::validate_title(&input.title)?;
        rules::validate_author(&input.author)?;
        rules::validate_isbn(&input.isbn)?;
        rules::validate_pages(input.pages)?;

        let book = self
            .store
            .create(ctx, &input)
            .await
            .map_err(|e| map_repo_error(e, 0))?;

        tracing::info!(
            trace_id = %ctx.trace_id(),
            book_id = book.id,
            isbn = %book.isbn,
            "book created"
        );
        Ok(book)
    }

    /// Fetch a live book by id.
    pub async fn get(&self, ctx: &RequestContext, id: DbId) -> Result<Book, CoreError> {
        ensure_valid_id(id)?;
        self.store
            .find_by_id(ctx, id)
            .await
            .map_err(|e| map_repo_error(e, id))
    }

    /// List live books, newest first.
    ///
    /// Out-of-range pagination input is clamped, never rejected: `page`
    /// falls back to 1 and `limit` to 20 when outside `[1, 100]`.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<BookListing, CoreError> {
        let page = pagination::clamp_page(page);
        let limit = pagination::clamp_page_size(limit);

        let BookPage { books, total } = self
            .store
            .list(ctx, page, limit)
            .await
            .map_err(|e| map_repo_error(e, 0))?;

        Ok(BookListing {
            books,
            page,
            limit,
            total,
        })
    }

    /// Update a book by merging the supplied fields over the stored record.
    ///
    /// Only `Some` fields overwrite; omitted fields are left untouched.
    /// Supplied fields are validated exactly as in [`Self::create`], so an
    /// explicit empty string is rejected rather than silently kept.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DbId,
        input: UpdateBook,
    ) -> Result<Book, CoreError> {
        ensure_valid_id(id)?;
        if let Some(title) = &input.title {
            rules::validate_title(title)?;
        }
        if let Some(author) = &input.author {
            rules::validate_author(author)?;
        }
        if let Some(isbn) = &input.isbn {
            rules::validate_isbn(isbn)?;
        }
        if let Some(pages) = input.pages {
            rules::validate_pages(pages)?;
        }

        let mut book = self
            .store
            .find_by_id(ctx, id)
            .await
            .map_err(|e| map_repo_error(e, id))?;

        if let Some(title) = input.title {
            book.title = title;
        }
        if let Some(author) = input.author {
            book.author = author;
        }
        if let Some(published) = input.published {
            book.published = published;
        }
        if let Some(isbn) = input.isbn {
            book.isbn = isbn;
        }
        if let Some(pages) = input.pages {
            book.pages = pages;
        }

        let updated = self
            .store
            .update(ctx, &book)
            .await
            .map_err(|e| map_repo_error(e, id))?;

        tracing::info!(trace_id = %ctx.trace_id(), book_id = id, "book updated");
        Ok(updated)
    }

    /// Soft-delete a book.
    ///
    /// Verifies the record is live first, so deleting an absent or
    /// already-deleted id reports [`CoreError::NotFound`]; a second delete
    /// is not a silent success.
    pub async fn delete(&self, ctx: &RequestContext, id: DbId) -> Result<(), CoreError> {
        ensure_valid_id(id)?;

        self.store
            .find_by_id(ctx, id)
            .await
            .map_err(|e| map_repo_error(e, id))?;

        self.store
            .soft_delete(ctx, id)
            .await
            .map_err(|e| map_repo_error(e, id))?;

        tracing::info!(trace_id = %ctx.trace_id(), book_id = id, "book deleted");
        Ok(())
    }
}

fn ensure_valid_id(id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(
            "book id must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Map a repository error into the service taxonomy.
///
/// This is the only place repository errors are interpreted; no `RepoError`
/// crosses the service's public contract.
fn map_repo_error(err: RepoError, id: DbId) -> CoreError {
    match err {
        RepoError::NotFound => CoreError::NotFound { entity: "Book", id },
        RepoError::DuplicateIsbn => {
            CoreError::Conflict("a live book with this ISBN already exists".into())
        }
        RepoError::InvalidReference(msg) => CoreError::Validation(format!("invalid reference: {msg}")),
        RepoError::Timeout => CoreError::Timeout("storage operation exceeded its deadline".into()),
        RepoError::Database(err) => CoreError::Internal(err.to_string()),
    }
}
