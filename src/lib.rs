//! Credential Manager - credential creation and verification core
//!
//! Signup with Argon2 password hashing, secret verification and
//! owner-only profile updates over an injected user store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations and bootstrap
//! - **config**: Application configuration and constants
//! - **domain**: Credentials, profiles and the password value object
//! - **services**: The credential manager use cases
//! - **infra**: Database handle and the SeaORM user store
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Register a credential
//! cargo run -- signup --email a@x.com --password pw123 --name Ann
//!
//! # Check a password
//! cargo run -- verify --email a@x.com --password pw123
//!
//! # Change the display name
//! cargo run -- rename --email a@x.com --password pw123 --name Annie
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AuthenticatedUser, Credential, Password, Profile, SignupRequest};
pub use errors::{AppError, AppResult};
pub use services::{CredentialManager, CredentialService};
