//! Centralized error handling.
//!
//! Provides a unified error type for the credential core. Every failure is a
//! distinct, inspectable kind; none of them carries a plaintext secret.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Credential lifecycle
    #[error("Credential already exists")]
    AlreadyExists,

    #[error("Credential not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Hashing (diagnostic only, never contains the secret)
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    // Store
    #[error("Persistence failed")]
    PersistenceFailed(#[from] DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable, machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::AlreadyExists => "ALREADY_EXISTS",
            AppError::NotFound => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::HashingFailed(_) => "HASHING_FAILED",
            AppError::PersistenceFailed(_) => "PERSISTENCE_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Map a store error, turning unique-constraint violations into `AlreadyExists`.
    pub fn from_store(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::PersistenceFailed(err),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::HashingFailed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
