//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Credential, Password};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Authoritative uniqueness guard for signups
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Credential {
    fn from(model: Model) -> Self {
        Credential {
            id: model.id,
            email: model.email,
            secret_hash: Password::from_hash(model.password_hash),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
