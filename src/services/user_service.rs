//! User service - the paginated/filtered query engine plus directory CRUD.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserInput, UserUpdate};
use crate::errors::{AppError, AppResult};
use crate::infra::{UserFilter, UserRepository};
use crate::types::PaginationParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List users for one page, returning the page and the total count of
    /// users matching the filter
    async fn list_users(
        &self,
        params: &PaginationParams,
        filter: &UserFilter,
    ) -> AppResult<(Vec<User>, u64)>;

    /// Get user by ID with address and company populated
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a user together with its owned address and company
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Partial-merge update; only provided fields overwrite
    async fn update_user(&self, id: i32, update: UserUpdate) -> AppResult<User>;

    /// Delete a user, cascading to its address and company
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService backed by the directory store.
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn list_users(
        &self,
        params: &PaginationParams,
        filter: &UserFilter,
    ) -> AppResult<(Vec<User>, u64)> {
        // Ordered by id ascending so page concatenation is deterministic.
        self.users
            .find_and_count(filter, params.offset(), params.limit())
            .await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        self.users.insert(input).await
    }

    async fn update_user(&self, id: i32, update: UserUpdate) -> AppResult<User> {
        self.users.update(id, update).await?.ok_or(AppError::NotFound)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.users.remove(id).await? {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
