//! Pagination defaults and clamping helpers.
//!
//! List endpoints never reject bad pagination input; out-of-range values are
//! silently corrected here before they reach the repository.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a 1-based page number to at least 1.
///
/// # Examples
///
/// ```
/// use libris_core::pagination::clamp_page;
/// assert_eq!(clamp_page(Some(3)), 3);
/// assert_eq!(clamp_page(Some(0)), 1);
/// assert_eq!(clamp_page(None), 1);
/// ```
pub fn clamp_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p >= 1 => p,
        _ => 1,
    }
}

/// Clamp a page size into `[1, MAX_PAGE_SIZE]`.
///
/// Anything missing or out of range falls back to [`DEFAULT_PAGE_SIZE`].
///
/// # Examples
///
/// ```
/// use libris_core::pagination::clamp_page_size;
/// assert_eq!(clamp_page_size(Some(50)), 50);
/// assert_eq!(clamp_page_size(Some(0)), 20);
/// assert_eq!(clamp_page_size(Some(500)), 20);
/// assert_eq!(clamp_page_size(None), 20);
/// ```
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    match page_size {
        Some(s) if (1..=MAX_PAGE_SIZE).contains(&s) => s,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Compute the row offset for a clamped page/page-size pair.
pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1).saturating_mul(page_size)
}
