use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::BookService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; all catalog access goes
    /// through the service).
    pub pool: libris_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Book catalog service.
    pub books: BookService,
}
