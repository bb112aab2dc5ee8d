//! Repository traits for URL mapping data access.

use crate::error::StorageError;
use async_trait::async_trait;

/// Capability to persist a new alias→URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a new mapping and returns the store-assigned id.
    ///
    /// Alias uniqueness is enforced by the store itself: the insert either
    /// succeeds and returns the new id, or detects the pre-existing alias
    /// atomically. There is no read-then-write race window between
    /// concurrent saves of the same alias.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already mapped.
    /// Returns [`StorageError::Database`] on any other persistence failure.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Capability to resolve an alias back to its URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Looks up a mapping by exact alias match.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no mapping exists.
    /// Returns [`StorageError::Database`] on any other failure.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Administrative mutations on existing mappings.
///
/// Not exposed over HTTP; exercised directly against the storage engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlAdmin: Send + Sync {
    /// Replaces the URL for an existing alias.
    ///
    /// Returns the number of affected rows. 0 means the alias did not exist;
    /// callers must treat that as a no-op, not a failure.
    async fn update_url(&self, alias: &str, new_url: &str) -> Result<u64, StorageError>;

    /// Removes the mapping for an alias.
    ///
    /// Returns the number of affected rows; 0 means the alias did not exist.
    async fn delete_url(&self, alias: &str) -> Result<u64, StorageError>;
}
