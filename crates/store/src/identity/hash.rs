//! Password hashing.
//!
//! The hashing scheme is pluggable so wiring can pick per environment. The
//! recommended implementation is [`Argon2Hasher`]; [`Sha256Hasher`] matches
//! the historical prototype data (a single unsalted digest) and must not be
//! used as a security control.

use std::fmt::Write;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};

/// A one-way password hashing scheme.
///
/// `verify` must accept exactly the strings `hash` produced for the same
/// password; login succeeds iff the stored hash verifies.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    ///
    /// Returns an opaque error if hashing fails.
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check a plaintext password against a stored hash.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Opaque hashing failure.
#[derive(Debug, thiserror::Error)]
#[error("password hashing failed")]
pub struct HashError;

/// Argon2id with a per-record random salt.
///
/// The default for any real wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| HashError)
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Single unsalted SHA-256 hex digest.
///
/// This is the scheme the original local-only prototype persisted, kept for
/// compatibility with that data. No salt, no iteration count - do not use
/// where the hashes could ever leave the local store.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        Ok(hex_digest(password))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        hex_digest(password) == stored
    }
}

fn hex_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}
