//! User store: credential persistence over SeaORM.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Credential, NewCredential};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store trait for dependency injection.
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation from `create` as `AppError::AlreadyExists`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a credential by its exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>>;

    /// Insert a new credential
    async fn create(&self, credential: NewCredential) -> AppResult<Credential>;

    /// Change the display name; `NotFound` if no credential has this email
    async fn update_display_name(&self, email: &str, name: String) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Credential>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Credential::from))
    }

    async fn create(&self, credential: NewCredential) -> AppResult<Credential> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(credential.email),
            password_hash: Set(credential.secret_hash.into_string()),
            name: Set(credential.name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from_store)?;
        Ok(Credential::from(model))
    }

    async fn update_display_name(&self, email: &str, name: String) -> AppResult<()> {
        // Single statement, so a concurrent delete shows up as zero rows
        let result = UserEntity::update_many()
            .col_expr(user::Column::Name, Expr::value(name))
            .col_expr(user::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(user::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
