//! Service-level tests against the in-memory store.
//!
//! These exercise the business rules (validation, clamping, partial merge,
//! delete idempotency, error mapping) without a database: the in-memory
//! backend enforces the same storage contract as Postgres.

use std::time::Duration;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use libris_api::service::BookService;
use libris_core::context::RequestContext;
use libris_core::error::CoreError;
use libris_db::models::book::{CreateBook, UpdateBook};
use libris_db::store::BookStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn service() -> BookService {
    BookService::new(BookStore::in_memory())
}

fn ctx() -> RequestContext {
    RequestContext::background()
}

fn dune() -> CreateBook {
    CreateBook {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
        isbn: "978-0-441-01359-3".to_string(),
        pages: 412,
    }
}

fn with_isbn(title: &str, isbn: &str) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        isbn: isbn.to_string(),
        ..dune()
    }
}

// ---------------------------------------------------------------------------
// Test: create + get roundtrip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_roundtrip() {
    let svc = service();
    let created = svc.create(&ctx(), dune()).await.unwrap();

    assert_eq!(created.id, 1);
    assert!(created.updated_at >= created.created_at);

    let fetched = svc.get(&ctx(), created.id).await.unwrap();
    assert_eq!(fetched.title, "Dune");
    assert_eq!(fetched.author, "Herbert");
    assert_eq!(fetched.isbn, "978-0-441-01359-3");
    assert_eq!(fetched.pages, 412);
}

// ---------------------------------------------------------------------------
// Test: every pages < 5 is rejected and nothing is persisted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_short_books() {
    let svc = service();

    for pages in [-10, 0, 1, 4] {
        let result = svc
            .create(&ctx(), CreateBook { pages, ..dune() })
            .await;
        assert_matches!(result, Err(CoreError::Validation(_)), "pages = {pages}");
    }

    let listing = svc.list(&ctx(), None, None).await.unwrap();
    assert_eq!(listing.total, 0, "failed creates must leave no rows");
}

#[tokio::test]
async fn create_rejects_field_violations() {
    let svc = service();

    let empty_title = CreateBook {
        title: String::new(),
        ..dune()
    };
    assert_matches!(
        svc.create(&ctx(), empty_title).await,
        Err(CoreError::Validation(_))
    );

    let long_title = CreateBook {
        title: "x".repeat(201),
        ..dune()
    };
    assert_matches!(
        svc.create(&ctx(), long_title).await,
        Err(CoreError::Validation(_))
    );

    let long_author = CreateBook {
        author: "a".repeat(101),
        ..dune()
    };
    assert_matches!(
        svc.create(&ctx(), long_author).await,
        Err(CoreError::Validation(_))
    );

    let bad_isbn = CreateBook {
        isbn: "123".to_string(),
        ..dune()
    };
    assert_matches!(
        svc.create(&ctx(), bad_isbn).await,
        Err(CoreError::Validation(_))
    );
}

// ---------------------------------------------------------------------------
// Test: non-positive ids are invalid input everywhere
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_positive_ids_are_invalid() {
    let svc = service();

    assert_matches!(svc.get(&ctx(), 0).await, Err(CoreError::Validation(_)));
    assert_matches!(svc.get(&ctx(), -1).await, Err(CoreError::Validation(_)));
    assert_matches!(
        svc.update(&ctx(), 0, UpdateBook::default()).await,
        Err(CoreError::Validation(_))
    );
    assert_matches!(svc.delete(&ctx(), -7).await, Err(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Test: pagination clamping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_clamps_out_of_range_pagination() {
    let svc = service();
    svc.create(&ctx(), dune()).await.unwrap();

    let listing = svc.list(&ctx(), Some(-3), Some(1000)).await.unwrap();
    assert_eq!(listing.page, 1);
    assert_eq!(listing.limit, 20);
    assert_eq!(listing.total, 1);

    let listing = svc.list(&ctx(), None, Some(0)).await.unwrap();
    assert_eq!(listing.page, 1);
    assert_eq!(listing.limit, 20);
}

// ---------------------------------------------------------------------------
// Test: listing is newest first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_orders_newest_first() {
    let svc = service();
    svc.create(&ctx(), with_isbn("First", "9780547928227"))
        .await
        .unwrap();
    svc.create(&ctx(), with_isbn("Second", "9780316769488"))
        .await
        .unwrap();
    svc.create(&ctx(), with_isbn("Third", "9780743273565"))
        .await
        .unwrap();

    let listing = svc.list(&ctx(), Some(1), Some(2)).await.unwrap();
    assert_eq!(listing.total, 3);
    let titles: Vec<&str> = listing.books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Third", "Second"]);
}

// ---------------------------------------------------------------------------
// Test: update merges only supplied fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let svc = service();
    let created = svc.create(&ctx(), dune()).await.unwrap();

    let patch = UpdateBook {
        title: Some("New Title".to_string()),
        ..UpdateBook::default()
    };
    let updated = svc.update(&ctx(), created.id, patch).await.unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.published, created.published);
    assert_eq!(updated.isbn, created.isbn);
    assert_eq!(updated.pages, created.pages);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_rejects_explicitly_cleared_field() {
    let svc = service();
    let created = svc.create(&ctx(), dune()).await.unwrap();

    // There is no way to blank a required field: an explicit empty string
    // is invalid input, not a silent keep.
    let patch = UpdateBook {
        title: Some(String::new()),
        ..UpdateBook::default()
    };
    assert_matches!(
        svc.update(&ctx(), created.id, patch).await,
        Err(CoreError::Validation(_))
    );
}

#[tokio::test]
async fn update_validates_supplied_fields() {
    let svc = service();
    let created = svc.create(&ctx(), dune()).await.unwrap();

    let patch = UpdateBook {
        pages: Some(2),
        ..UpdateBook::default()
    };
    assert_matches!(
        svc.update(&ctx(), created.id, patch).await,
        Err(CoreError::Validation(_))
    );

    // The stored record is untouched after the failed update.
    let fetched = svc.get(&ctx(), created.id).await.unwrap();
    assert_eq!(fetched.pages, 412);
}

// ---------------------------------------------------------------------------
// Test: duplicate ISBN conflicts, and frees up after delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_isbn_conflicts_until_deleted() {
    let svc = service();
    let first = svc.create(&ctx(), dune()).await.unwrap();

    assert_matches!(
        svc.create(&ctx(), dune()).await,
        Err(CoreError::Conflict(_))
    );

    svc.delete(&ctx(), first.id).await.unwrap();

    let third = svc.create(&ctx(), dune()).await.unwrap();
    assert_ne!(third.id, first.id);
}

// ---------------------------------------------------------------------------
// Test: delete is observable and not idempotent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_hides_record_and_reports_not_found_twice() {
    let svc = service();
    let created = svc.create(&ctx(), dune()).await.unwrap();

    svc.delete(&ctx(), created.id).await.unwrap();

    assert_matches!(
        svc.get(&ctx(), created.id).await,
        Err(CoreError::NotFound { entity: "Book", id }) if id == created.id
    );

    let listing = svc.list(&ctx(), None, None).await.unwrap();
    assert_eq!(listing.total, 0);

    assert_matches!(
        svc.delete(&ctx(), created.id).await,
        Err(CoreError::NotFound { .. })
    );
}

// ---------------------------------------------------------------------------
// Test: an elapsed deadline maps to the Timeout error kind
// ---------------------------------------------------------------------------

#[tokio::test]
async fn elapsed_deadline_maps_to_timeout() {
    let svc = service();
    let expired = RequestContext::background().with_timeout(Duration::ZERO);

    assert_matches!(
        svc.get(&expired, 1).await,
        Err(CoreError::Timeout(_))
    );
}
