//! Application state - Dependency injection container.
//!
//! Each component receives its store handle at construction, so tests can
//! substitute mock stores and services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, IdentityStore, UserStore};
use crate::services::{Authenticator, AuthService, TokenService, UserDirectory, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Auth gateway (register, login, bearer authentication)
    pub auth_service: Arc<dyn AuthService>,
    /// User directory query engine and CRUD
    pub user_service: Arc<dyn UserService>,
    /// Database connection (health checks)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a live database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let connection = database.get_connection();
        let identities = Arc::new(IdentityStore::new(connection.clone()));
        let users = Arc::new(UserStore::new(connection));

        let auth_service = Arc::new(Authenticator::new(
            identities,
            TokenService::new(config),
        ));
        let user_service = Arc::new(UserDirectory::new(users));

        Self {
            auth_service,
            user_service,
            database: Some(database),
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
            database: None,
        }
    }
}
