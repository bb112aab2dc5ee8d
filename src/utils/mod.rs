//! Utility functions shared across the application.
//!
//! - [`alias`] - Random alias generation

pub mod alias;
