//! Identity error types.

use thiserror::Error;

use crate::kv::KvError;

/// Errors that can occur during identity operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] ecofinds_core::EmailError),

    /// Registration attempted with an email that already has a profile
    /// (case-insensitive match).
    #[error("email already registered")]
    DuplicateEmail,

    /// Invalid credentials (unknown email or wrong password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Persisting the mutated state failed.
    #[error("storage error: {0}")]
    Storage(#[from] KvError),
}
