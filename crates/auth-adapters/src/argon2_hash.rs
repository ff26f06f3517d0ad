//! Argon2-based implementation of `PasswordHash`.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use domains::{DomainError, PasswordHash, Result};

/// Hashing runs on the blocking pool; Argon2 is deliberately slow.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHash;

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!(error = %err, "password hashing failed");
            DomainError::internal("password hashing failed")
        })
}

fn verify_blocking(plain: &str, hashed: &str) -> Result<()> {
    let parsed = ParsedHash::new(hashed).map_err(|err| {
        tracing::error!(error = %err, "stored password hash is malformed");
        DomainError::internal("stored password hash is malformed")
    })?;

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .map_err(|_| DomainError::authentication("kredensial yang Anda masukkan salah"))
}

#[async_trait]
impl PasswordHash for Argon2PasswordHash {
    async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|err| DomainError::internal(format!("hashing task failed: {err}")))?
    }

    async fn compare_password(&self, plain: &str, hashed: &str) -> Result<()> {
        let (plain, hashed) = (plain.to_owned(), hashed.to_owned());
        tokio::task::spawn_blocking(move || verify_blocking(&plain, &hashed))
            .await
            .map_err(|err| DomainError::internal(format!("hashing task failed: {err}")))?
    }
}
