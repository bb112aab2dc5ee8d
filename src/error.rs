//! Storage error taxonomy.
//!
//! Errors are classified at the point of return from the storage layer so that
//! handlers can translate them into fixed, non-leaking response bodies. The
//! underlying driver error and the failing operation are kept for logging and
//! never serialized into an HTTP response.

use thiserror::Error;

/// Errors produced by the storage engine.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already mapped. Detected atomically by the
    /// conflict-aware insert, never by a separate read.
    #[error("url already exists")]
    AliasExists,

    /// No mapping exists for the requested alias.
    #[error("url not found")]
    NotFound,

    /// The store was unreachable or the schema could not be created.
    /// Fatal at startup; the process must not accept requests.
    #[error("failed to connect to storage")]
    Connection(#[source] sqlx::Error),

    /// Any other persistence failure, wrapped with the operation name
    /// for diagnostics.
    #[error("{operation}: execute statement failed")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// True when the error represents a missing mapping rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound)
    }
}
