//! Domain layer: data access contracts.
//!
//! Defines the repository traits implemented by the infrastructure layer.
//! The domain layer has no dependency on the web or persistence stack beyond
//! the shared [`crate::error::StorageError`] type.

pub mod repositories;
