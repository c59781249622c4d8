use crate::types::DbId;

/// Service-level error taxonomy.
///
/// This is the only error vocabulary the transport layer sees. Repository
/// errors are mapped into these variants at the service boundary and never
/// cross it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
