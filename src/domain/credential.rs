//! Credential domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Password;

/// Stored credential for one identifier (email).
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub secret_hash: Password,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Credential data handed to the store; id and timestamps are assigned there.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub email: String,
    pub secret_hash: Password,
    pub name: String,
}

/// Signup input. Transient: dropped once the secret is hashed.
#[derive(Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

/// Profile (safe to return to callers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Credential> for Profile {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id,
            email: credential.email,
            name: credential.name,
            created_at: credential.created_at,
            updated_at: credential.updated_at,
        }
    }
}

/// Owner whose secret has been verified.
///
/// Only the credential service hands these out, so holding one means the
/// caller passed `authenticate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    id: Uuid,
    email: String,
}

impl AuthenticatedUser {
    pub(crate) fn new(id: Uuid, email: String) -> Self {
        Self { id, email }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<&Credential> for AuthenticatedUser {
    fn from(credential: &Credential) -> Self {
        Self::new(credential.id, credential.email.clone())
    }
}
