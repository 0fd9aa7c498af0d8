//! Credential service - signup, verification and owner profile updates.
//!
//! The store is injected at construction; the service itself keeps no
//! per-request state. Hashing runs on tokio's blocking pool.

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::config::{Config, DEFAULT_HASH_WORK_FACTOR};
use crate::domain::{
    verify_hash, AuthenticatedUser, Credential, NewCredential, Password, Profile, SignupRequest,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// Credential service trait for dependency injection.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Register a new credential. Fails with `AlreadyExists` for a known email.
    async fn create(&self, request: SignupRequest) -> AppResult<Credential>;

    /// Check a plain text secret against a stored hash. Mismatch is `false`.
    fn verify(&self, plain_text: &str, stored_hash: &str) -> bool;

    /// Change the display name of an existing credential
    async fn update(&self, email: &str, name: String) -> AppResult<()>;

    /// Verify email + secret and hand out the typed owner context
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser>;

    /// Current profile of an authenticated owner
    async fn fetch_profile(&self, owner: &AuthenticatedUser) -> AppResult<Profile>;

    /// Owner-only display name change, returning the refreshed profile
    async fn update_profile(&self, owner: &AuthenticatedUser, name: String) -> AppResult<Profile>;
}

/// Concrete implementation of CredentialService.
pub struct CredentialManager {
    users: Arc<dyn UserRepository>,
    work_factor: u32,
    /// Verified against when an email is unknown, so both login paths cost the same.
    /// Built with the default work factor, never the configured one.
    dummy_hash: OnceCell<Option<Password>>,
}

impl CredentialManager {
    /// Create a manager over the given store and Argon2 work factor
    pub fn new(users: Arc<dyn UserRepository>, work_factor: u32) -> Self {
        Self {
            users,
            work_factor,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Create a manager using the configured work factor
    pub fn from_config(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self::new(users, config.hash_work_factor)
    }

    fn dummy_hash(&self) -> Option<Password> {
        self.dummy_hash
            .get_or_init(|| {
                Password::new(&Uuid::new_v4().to_string(), DEFAULT_HASH_WORK_FACTOR)
                    .map_err(|e| tracing::error!("Failed to build dummy hash: {}", e))
                    .ok()
            })
            .clone()
    }
}

#[async_trait]
impl CredentialService for CredentialManager {
    async fn create(&self, request: SignupRequest) -> AppResult<Credential> {
        request
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        validate_display_name(&request.name)?;

        // Advisory only: the store's unique constraint settles races
        if self.users.find_by_email(&request.email).await?.is_some() {
            tracing::debug!(email = %request.email, "Signup rejected, email already registered");
            return Err(AppError::AlreadyExists);
        }

        let SignupRequest {
            email,
            password,
            name,
        } = request;
        let secret_hash = hash_blocking(password, self.work_factor).await?;

        let credential = self
            .users
            .create(NewCredential {
                email,
                secret_hash,
                name,
            })
            .await?;

        tracing::info!(id = %credential.id, email = %credential.email, "Credential created");
        Ok(credential)
    }

    fn verify(&self, plain_text: &str, stored_hash: &str) -> bool {
        verify_hash(plain_text, stored_hash)
    }

    async fn update(&self, email: &str, name: String) -> AppResult<()> {
        validate_display_name(&name)?;

        self.users.update_display_name(email, name).await?;
        tracing::info!(email, "Display name updated");
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let stored = self.users.find_by_email(email).await?;

        let hash = match &stored {
            Some(credential) => Some(credential.secret_hash.clone()),
            None => self.dummy_hash(),
        };

        let password = password.to_string();
        let valid =
            tokio::task::spawn_blocking(move || hash.map_or(false, |hash| hash.verify(&password)))
                .await
                .map_err(|e| AppError::hashing(format!("verification task failed: {}", e)))?;

        match stored {
            Some(credential) if valid => Ok(AuthenticatedUser::from(&credential)),
            _ => {
                tracing::warn!(email, "Authentication failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn fetch_profile(&self, owner: &AuthenticatedUser) -> AppResult<Profile> {
        let credential = self
            .users
            .find_by_email(owner.email())
            .await?
            .filter(|credential| credential.id == owner.id())
            .ok_or_not_found()?;

        Ok(Profile::from(credential))
    }

    async fn update_profile(&self, owner: &AuthenticatedUser, name: String) -> AppResult<Profile> {
        self.update(owner.email(), name).await?;
        self.fetch_profile(owner).await
    }
}

/// Display names must contain something other than whitespace.
fn validate_display_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name cannot be empty"));
    }
    Ok(())
}

/// Hash a secret off the async executor.
async fn hash_blocking(password: String, work_factor: u32) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new(&password, work_factor))
        .await
        .map_err(|e| AppError::hashing(format!("hashing task failed: {}", e)))?
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::DbErr;

    use crate::infra::MockUserRepository;

    fn stored(new: NewCredential) -> Credential {
        let now = Utc::now();
        Credential {
            id: Uuid::new_v4(),
            email: new.email,
            secret_hash: new.secret_hash,
            name: new.name,
            created_at: now,
            updated_at: now,
        }
    }

    fn existing(email: &str, password: &str) -> Credential {
        stored(NewCredential {
            email: email.to_string(),
            secret_hash: Password::new(password, DEFAULT_HASH_WORK_FACTOR).unwrap(),
            name: "Ann".to_string(),
        })
    }

    fn manager(repo: MockUserRepository) -> CredentialManager {
        CredentialManager::new(Arc::new(repo), DEFAULT_HASH_WORK_FACTOR)
    }

    #[tokio::test]
    async fn test_create_then_verify() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new| Ok(stored(new)));

        let service = manager(repo);
        let credential = service
            .create(SignupRequest::new("a@x.com", "pw123", "Ann"))
            .await
            .unwrap();

        assert_eq!(credential.email, "a@x.com");
        assert_eq!(credential.name, "Ann");
        assert!(service.verify("pw123", credential.secret_hash.as_str()));
        assert!(!service.verify("pw124", credential.secret_hash.as_str()));
        assert!(!credential.secret_hash.as_str().contains("pw123"));
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(existing(email, "pw123"))));
        repo.expect_create().never();

        let result = manager(repo)
            .create(SignupRequest::new("a@x.com", "other", "Bob"))
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_store_conflict_is_already_exists() {
        // Lost the race: the advisory check passed but the insert conflicted
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(AppError::AlreadyExists));

        let result = manager(repo)
            .create(SignupRequest::new("a@x.com", "pw123", "Ann"))
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_invalid_work_factor() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().never();

        let service = CredentialManager::new(Arc::new(repo), 0);
        let err = service
            .create(SignupRequest::new("a@x.com", "pw-secret-123", "Ann"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::HashingFailed(_)));
        assert!(!err.to_string().contains("pw-secret-123"));
    }

    #[tokio::test]
    async fn test_create_persistence_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(AppError::from(DbErr::Custom("disk full".to_string()))));

        let result = manager(repo)
            .create(SignupRequest::new("a@x.com", "pw123", "Ann"))
            .await;

        assert!(matches!(result, Err(AppError::PersistenceFailed(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();
        let service = manager(repo);

        let no_email = service.create(SignupRequest::new("", "pw123", "Ann")).await;
        let no_password = service.create(SignupRequest::new("a@x.com", "", "Ann")).await;

        assert!(matches!(no_email, Err(AppError::Validation(_))));
        assert!(matches!(no_password, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_verify_malformed_hash() {
        let service = manager(MockUserRepository::new());
        assert!(!service.verify("pw123", "plain-text-not-a-hash"));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_display_name()
            .returning(|_, _| Err(AppError::NotFound));

        let result = manager(repo).update("ghost@x.com", "Ann".to_string()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_passes_name_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_display_name()
            .withf(|email, name| email == "a@x.com" && name == "Annie")
            .times(1)
            .returning(|_, _| Ok(()));

        assert!(manager(repo).update("a@x.com", "Annie".to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_display_name().never();

        let result = manager(repo).update("a@x.com", "   ".to_string()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let credential = existing("a@x.com", "pw123");
        let id = credential.id;
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(credential.clone())));

        let owner = manager(repo).authenticate("a@x.com", "pw123").await.unwrap();

        assert_eq!(owner.id(), id);
        assert_eq!(owner.email(), "a@x.com");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let credential = existing("a@x.com", "pw123");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(credential.clone())));

        let result = manager(repo).authenticate("a@x.com", "pw124").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = manager(repo).authenticate("ghost@x.com", "pw123").await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_ignores_configured_work_factor() {
        // Stored hash carries its own cost; only the unknown-email path would
        // touch the broken config
        let credential = existing("a@x.com", "pw123");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |email| Ok((email == "a@x.com").then(|| credential.clone())));

        let service = CredentialManager::new(Arc::new(repo), 0);
        let known = service.authenticate("a@x.com", "pw123").await;
        let unknown = service.authenticate("ghost@x.com", "pw123").await;

        assert!(known.is_ok());
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();
        let service = manager(repo);

        let empty = service.create(SignupRequest::new("a@x.com", "pw123", "")).await;
        let blank = service.create(SignupRequest::new("a@x.com", "pw123", "   ")).await;

        assert!(matches!(empty, Err(AppError::Validation(_))));
        assert!(matches!(blank, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_fetch_profile_checks_owner_id() {
        let credential = existing("a@x.com", "pw123");
        let owner = AuthenticatedUser::new(Uuid::new_v4(), "a@x.com".to_string());
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(credential.clone())));

        let result = manager(repo).fetch_profile(&owner).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_returns_fresh_profile() {
        let mut credential = existing("a@x.com", "pw123");
        let owner = AuthenticatedUser::from(&credential);
        credential.name = "Annie".to_string();

        let mut repo = MockUserRepository::new();
        repo.expect_update_display_name()
            .withf(|email, name| email == "a@x.com" && name == "Annie")
            .returning(|_, _| Ok(()));
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(credential.clone())));

        let profile = manager(repo)
            .update_profile(&owner, "Annie".to_string())
            .await
            .unwrap();

        assert_eq!(profile.name, "Annie");
        assert_eq!(profile.id, owner.id());
    }
}
