//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the user store. They depend on the
//! `UserRepository` abstraction so the store can be swapped or mocked.

mod credential_service;

pub use credential_service::{CredentialManager, CredentialService};
