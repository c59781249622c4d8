//! Handlers for the `/books` resource.
//!
//! Thin glue: bind the request, build the request context, call the
//! service, shape the response. All business rules live in
//! [`crate::service::BookService`].

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use libris_core::types::DbId;
use libris_db::models::book::{Book, CreateBook, UpdateBook};

use crate::context::Ctx;
use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::BookListResponse;
use crate::state::AppState;

type CacheControl = [(HeaderName, &'static str); 1];

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, CacheControl, Json<Book>)> {
    let book = state.books.create(&ctx, input).await?;
    Ok((
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-store")],
        Json(book),
    ))
}

/// GET /api/v1/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Path(id): Path<DbId>,
) -> AppResult<(CacheControl, Json<Book>)> {
    let book = state.books.get(&ctx, id).await?;
    Ok(([(header::CACHE_CONTROL, "max-age=3600, public")], Json(book)))
}

/// GET /api/v1/books?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Query(params): Query<ListParams>,
) -> AppResult<(CacheControl, Json<BookListResponse>)> {
    let listing = state.books.list(&ctx, params.page, params.limit).await?;
    Ok((
        [(header::CACHE_CONTROL, "max-age=60, public")],
        Json(BookListResponse {
            data: listing.books,
            page: listing.page,
            limit: listing.limit,
            total: listing.total,
        }),
    ))
}

/// PUT /api/v1/books/{id}
pub async fn update(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.books.update(&ctx, id, input).await?;
    Ok(Json(book))
}

/// DELETE /api/v1/books/{id}
pub async fn delete(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.books.delete(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
