//! Field contracts for book records.
//!
//! The service layer runs these checks before any storage call, so a
//! validation failure never leaves partial side effects. Limits match the
//! column definitions in the `books` table.

use crate::error::CoreError;
use crate::isbn;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum author length in characters.
pub const MAX_AUTHOR_LEN: usize = 100;

/// Minimum page count for a catalog entry.
pub const MIN_PAGES: i32 = 5;

/// Validate a title: non-empty, at most [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation("title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an author name: non-empty, at most [`MAX_AUTHOR_LEN`] characters.
pub fn validate_author(author: &str) -> Result<(), CoreError> {
    if author.is_empty() {
        return Err(CoreError::Validation("author is required".into()));
    }
    if author.chars().count() > MAX_AUTHOR_LEN {
        return Err(CoreError::Validation(format!(
            "author must be at most {MAX_AUTHOR_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an ISBN via its checksum (ISBN-10 or ISBN-13).
pub fn validate_isbn(raw: &str) -> Result<(), CoreError> {
    if isbn::is_valid(raw) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("invalid ISBN: {raw}")))
    }
}

/// Validate a page count: at least [`MIN_PAGES`].
pub fn validate_pages(pages: i32) -> Result<(), CoreError> {
    if pages < MIN_PAGES {
        return Err(CoreError::Validation(format!(
            "book must have at least {MIN_PAGES} pages"
        )));
    }
    Ok(())
}
