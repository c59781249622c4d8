//! Polymorphic storage capability for book records.
//!
//! The service layer holds a [`BookStore`] and never names a concrete
//! backend. The variant is chosen once, at construction: Postgres in
//! production, the in-memory store in tests. Both enforce the same contract
//! (live-row reads, ISBN uniqueness among live rows, transactional soft
//! delete), so service behaviour is identical across backends.

pub mod memory;

use libris_core::context::RequestContext;
use libris_core::types::DbId;

use crate::error::RepoError;
use crate::models::book::{Book, BookPage, CreateBook};
use crate::repositories::BookRepo;
use crate::DbPool;

pub use memory::MemoryStore;

/// Storage backend for book records, selected at construction.
#[derive(Clone)]
pub enum BookStore {
    /// SQL-backed storage over a shared connection pool.
    Postgres(DbPool),
    /// In-memory storage for tests.
    Memory(MemoryStore),
}

impl BookStore {
    /// A store backed by the given Postgres pool.
    pub fn postgres(pool: DbPool) -> Self {
        BookStore::Postgres(pool)
    }

    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        BookStore::Memory(MemoryStore::new())
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: &CreateBook,
    ) -> Result<Book, RepoError> {
        match self {
            BookStore::Postgres(pool) => BookRepo::create(pool, ctx, input).await,
            BookStore::Memory(mem) => mem.create(ctx, input),
        }
    }

    pub async fn find_by_id(&self, ctx: &RequestContext, id: DbId) -> Result<Book, RepoError> {
        match self {
            BookStore::Postgres(pool) => BookRepo::find_by_id(pool, ctx, id).await,
            BookStore::Memory(mem) => mem.find_by_id(ctx, id),
        }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: i64,
        page_size: i64,
    ) -> Result<BookPage, RepoError> {
        match self {
            BookStore::Postgres(pool) => BookRepo::list(pool, ctx, page, page_size).await,
            BookStore::Memory(mem) => mem.list(ctx, page, page_size),
        }
    }

    pub async fn update(&self, ctx: &RequestContext, book: &Book) -> Result<Book, RepoError> {
        match self {
            BookStore::Postgres(pool) => BookRepo::update(pool, ctx, book).await,
            BookStore::Memory(mem) => mem.update(ctx, book),
        }
    }

    pub async fn soft_delete(&self, ctx: &RequestContext, id: DbId) -> Result<(), RepoError> {
        match self {
            BookStore::Postgres(pool) => BookRepo::soft_delete(pool, ctx, id).await,
            BookStore::Memory(mem) => mem.soft_delete(ctx, id),
        }
    }
}
