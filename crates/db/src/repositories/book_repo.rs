//! Repository for the `books` table.

use libris_core::context::RequestContext;
use libris_core::pagination;
use libris_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::book::{Book, BookPage, CreateBook};
use crate::repositories::under_deadline;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, published, isbn, pages, created_at, updated_at";

/// Provides CRUD operations for books.
///
/// Every read filters on `deleted_at IS NULL`; a soft-deleted row is
/// invisible to all of these methods except as the target of the
/// `deleted_at` update itself.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row with its generated
    /// `id`, `created_at` and `updated_at`.
    ///
    /// An ISBN collision with a live row surfaces as
    /// [`RepoError::DuplicateIsbn`] via the partial unique index.
    pub async fn create(
        pool: &PgPool,
        ctx: &RequestContext,
        input: &CreateBook,
    ) -> Result<Book, RepoError> {
        let query = format!(
            "INSERT INTO books (title, author, published, isbn, pages)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        under_deadline(ctx, async {
            let book = sqlx::query_as::<_, Book>(&query)
                .bind(&input.title)
                .bind(&input.author)
                .bind(input.published)
                .bind(&input.isbn)
                .bind(input.pages)
                .fetch_one(pool)
                .await?;
            Ok(book)
        })
        .await
    }

    /// Fetch a live book by id. Zero rows maps to [`RepoError::NotFound`].
    pub async fn find_by_id(
        pool: &PgPool,
        ctx: &RequestContext,
        id: DbId,
    ) -> Result<Book, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1 AND deleted_at IS NULL");
        under_deadline(ctx, async {
            sqlx::query_as::<_, Book>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await?
                .ok_or(RepoError::NotFound)
        })
        .await
    }

    /// Fetch one page of live books plus the total live count.
    ///
    /// Both reads run inside one REPEATABLE READ transaction so the total is
    /// consistent with the returned page even under concurrent writes.
    /// Ordering is `created_at DESC`; rows created in the same instant keep
    /// their natural (insertion) order. `page` and `page_size` are expected
    /// pre-clamped by the caller.
    pub async fn list(
        pool: &PgPool,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> Result<BookPage, RepoError> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        under_deadline(ctx, async {
            let mut tx = pool.begin().await?;

            sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
                .execute(&mut *tx)
                .await?;

            let (total,): (i64,) =
                sqlx::query_as("SELECT COUNT(*) FROM books WHERE deleted_at IS NULL")
                    .fetch_one(&mut *tx)
                    .await?;

            let books = sqlx::query_as::<_, Book>(&query)
                .bind(page_size)
                .bind(pagination::offset(page, page_size))
                .fetch_all(&mut *tx)
                .await?;

            tx.commit().await?;
            Ok(BookPage { books, total })
        })
        .await
    }

    /// Full-row update of all mutable fields plus `updated_at = NOW()`.
    ///
    /// The caller supplies the already-merged record. Zero rows affected
    /// (absent or soft-deleted id) maps to [`RepoError::NotFound`].
    pub async fn update(
        pool: &PgPool,
        ctx: &RequestContext,
        book: &Book,
    ) -> Result<Book, RepoError> {
        let query = format!(
            "UPDATE books SET
                title = $2,
                author = $3,
                published = $4,
                isbn = $5,
                pages = $6,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        under_deadline(ctx, async {
            sqlx::query_as::<_, Book>(&query)
                .bind(book.id)
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.published)
                .bind(&book.isbn)
                .bind(book.pages)
                .fetch_optional(pool)
                .await?
                .ok_or(RepoError::NotFound)
        })
        .await
    }

    /// Soft-delete a book inside a transaction.
    ///
    /// Commits only when exactly one row was marked; otherwise the
    /// transaction rolls back and the caller sees [`RepoError::NotFound`].
    /// A second delete of the same id therefore also reports `NotFound`.
    pub async fn soft_delete(
        pool: &PgPool,
        ctx: &RequestContext,
        id: DbId,
    ) -> Result<(), RepoError> {
        under_deadline(ctx, async {
            let mut tx = pool.begin().await?;

            let result =
                sqlx::query("UPDATE books SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

            if result.rows_affected() != 1 {
                tx.rollback().await?;
                return Err(RepoError::NotFound);
            }

            tx.commit().await?;
            Ok(())
        })
        .await
    }
}
