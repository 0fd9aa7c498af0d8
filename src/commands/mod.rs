//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.
//! `bootstrap` owns the database handle and wires the store into the manager.

pub mod profile;
pub mod signup;
pub mod verify;

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::CredentialManager;

/// Connect to the database and build a credential manager over it.
pub async fn bootstrap(config: &Config) -> AppResult<CredentialManager> {
    let db = Database::connect(config).await?;
    let users = Arc::new(UserStore::new(db.get_connection()));

    tracing::debug!(work_factor = config.hash_work_factor, "Credential manager ready");
    Ok(CredentialManager::from_config(users, config))
}

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to encode output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
