//! Repository error vocabulary.
//!
//! Storage-level failures are classified here, at the edge of the database,
//! so the rest of the system never inspects sqlx errors or Postgres error
//! codes. The service layer maps these variants into `CoreError` and no
//! `RepoError` crosses the service's public contract.

/// Errors reported by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// No live row with the requested id.
    #[error("book not found")]
    NotFound,

    /// A live row with the same ISBN already exists.
    #[error("isbn already exists")]
    DuplicateIsbn,

    /// The row references a record that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The operation's deadline elapsed before the statement completed.
    #[error("storage operation timed out")]
    Timeout,

    /// Any other storage failure, kept opaque.
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    /// Classify a sqlx error.
    ///
    /// - `RowNotFound` maps to [`RepoError::NotFound`].
    /// - Unique violations (23505) on a `uq_`-prefixed constraint map to
    ///   [`RepoError::DuplicateIsbn`].
    /// - Foreign-key violations (23503) map to [`RepoError::InvalidReference`].
    /// - Pool acquisition timeouts map to [`RepoError::Timeout`].
    /// - Everything else stays opaque.
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            sqlx::Error::PoolTimedOut => RepoError::Timeout,
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().unwrap_or("");
                match db_err.code().as_deref() {
                    Some("23505") if constraint.starts_with("uq_") => RepoError::DuplicateIsbn,
                    Some("23503") => RepoError::InvalidReference(db_err.message().to_string()),
                    _ => RepoError::Database(err),
                }
            }
            _ => RepoError::Database(err),
        }
    }
}
