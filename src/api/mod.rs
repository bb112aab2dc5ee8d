//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into storage operations and formats responses
//! according to the fixed `{"status","error"?,"alias"?}` envelope.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`response`] - Shared response envelope

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
