//! Domain layer - Core business entities and logic
//!
//! Credential entities and the password value object, independent of
//! the store that persists them.

pub mod credential;
pub mod password;

pub use credential::{AuthenticatedUser, Credential, NewCredential, Profile, SignupRequest};
pub use password::{verify_hash, Password};
