//! Password value object - secret hashing and verification.
//!
//! Hashes are Argon2id PHC strings; the salt and cost parameters travel inside
//! the hash, so verification never needs the current configuration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{MAX_HASH_WORK_FACTOR, MIN_HASH_WORK_FACTOR};
use crate::errors::{AppError, AppResult};

/// Hashed secret as persisted in the store.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text secret with the given work factor (Argon2 time cost).
    ///
    /// # Errors
    /// `Validation` for an empty secret, `HashingFailed` when the work factor
    /// is outside Argon2's accepted range or hashing fails internally.
    pub fn new(plain_text: &str, work_factor: u32) -> AppResult<Self> {
        if plain_text.is_empty() {
            return Err(AppError::validation("Password must not be empty"));
        }

        let hash = Self::hash(plain_text, work_factor)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text secret against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        verify_hash(plain_text, &self.hash)
    }

    fn hash(plain_text: &str, work_factor: u32) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = hasher(work_factor)?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(e.to_string()))?;
        Ok(hash.to_string())
    }
}

/// Check `plain_text` against a stored PHC hash string.
///
/// The digest comparison inside `argon2` is constant-time. A hash that does
/// not parse counts as a mismatch.
pub fn verify_hash(plain_text: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Stored hash is not a valid PHC string: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(plain_text.as_bytes(), &parsed)
        .is_ok()
}

/// Argon2id hasher for the given time cost.
fn hasher(work_factor: u32) -> AppResult<Argon2<'static>> {
    let params = Params::new(
        Params::DEFAULT_M_COST,
        work_factor,
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(|e| {
        AppError::hashing(format!(
            "work factor {} rejected ({}..={}): {}",
            work_factor, MIN_HASH_WORK_FACTOR, MAX_HASH_WORK_FACTOR, e
        ))
    })?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
