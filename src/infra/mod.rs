//! Infrastructure layer - External systems integration
//!
//! This module handles persistence concerns:
//! - Database connection and migrations
//! - Store contracts (repositories) and their SeaORM implementations

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    IdentityRepository, IdentityStore, UserFilter, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockIdentityRepository, MockUserRepository};
