//! # api-adapters
//!
//! The HTTP boundary: routing, auth extraction, the JSON envelope and the
//! translation of domain errors into client-facing responses.

pub mod translator;

#[cfg(feature = "web-axum")]
pub mod http;

pub use translator::translate;
