//! # auth-adapters
//!
//! Identity adapters: Argon2 password hashing and, behind `auth-jwt`,
//! HS256 access/refresh tokens.

mod argon2_hash;
#[cfg(feature = "auth-jwt")]
mod jwt;

pub use argon2_hash::Argon2PasswordHash;
#[cfg(feature = "auth-jwt")]
pub use jwt::JwtTokenManager;
