//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_HASH_WORK_FACTOR};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Argon2 time cost. Range-checked when hashing, not here.
    pub hash_work_factor: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("hash_work_factor", &self.hash_work_factor)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let hash_work_factor = match env::var("HASH_WORK_FACTOR") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("HASH_WORK_FACTOR is not an integer, using default");
                DEFAULT_HASH_WORK_FACTOR
            }),
            Err(_) => DEFAULT_HASH_WORK_FACTOR,
        };

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            hash_work_factor,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            hash_work_factor: DEFAULT_HASH_WORK_FACTOR,
        }
    }
}
