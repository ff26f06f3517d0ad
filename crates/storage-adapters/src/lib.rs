//! # storage-adapters
//!
//! Persistence adapters for the repository ports in `domains`.
//! The PostgreSQL implementation sits behind the `db-postgres` feature.

pub mod id;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use id::{uuid_id_generator, IdGenerator};
