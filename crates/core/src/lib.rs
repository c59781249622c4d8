//! Storage-agnostic domain vocabulary for the book catalog.
//!
//! This crate has no database or HTTP dependencies. It provides the shared
//! type aliases, the service-level error taxonomy, the explicit request
//! context threaded through every operation, and the pure validation rules
//! (field contracts, ISBN checksums, pagination clamping) that the service
//! layer enforces before any storage call.

pub mod book;
pub mod context;
pub mod error;
pub mod isbn;
pub mod pagination;
pub mod types;
