//! Credential store contract and its SeaORM implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use super::entities::identity;
use crate::domain::Identity;
use crate::errors::{AppError, AppResult};

/// Credential store boundary: one record per registered identity.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Look up an identity by its (unique, case-sensitive) email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>>;

    /// Look up an identity by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Identity>>;

    /// Persist a new identity.
    ///
    /// A duplicate-email insert race is rejected by the store's unique index
    /// and surfaced as `DuplicateEmail`.
    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<Identity>;
}

/// SeaORM-backed credential store.
pub struct IdentityStore {
    db: DatabaseConnection,
}

impl IdentityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityRepository for IdentityStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        let result = identity::Entity::find()
            .filter(identity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Identity::from))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Identity>> {
        let result = identity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(Identity::from))
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<Identity> {
        let now = Utc::now();
        let active_model = identity::ActiveModel {
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::DuplicateEmail
            } else {
                AppError::from(e)
            }
        })?;

        Ok(Identity::from(model))
    }
}

impl From<identity::Model> for Identity {
    fn from(model: identity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
