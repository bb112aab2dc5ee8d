//! Repository trait definitions for the domain layer.
//!
//! Each trait is a narrow capability interface exposing only the operations a
//! single consumer needs, so handlers can be tested against small mock doubles
//! instead of the full storage engine.
//!
//! - [`UrlSaver`] - insert a new mapping (save handler)
//! - [`UrlGetter`] - resolve an alias (redirect handler)
//! - [`UrlAdmin`] - update/delete mappings (administrative, no HTTP surface)
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod url_repository;

pub use url_repository::{UrlAdmin, UrlGetter, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockUrlAdmin, MockUrlGetter, MockUrlSaver};
