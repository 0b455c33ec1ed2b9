//! Repository layer - Data access abstraction
//!
//! Store contracts are traits so services receive a store handle at
//! construction and tests can substitute mocks.

pub(crate) mod entities;
mod identity_repository;
mod user_repository;

pub use identity_repository::{IdentityRepository, IdentityStore};
pub use user_repository::{UserFilter, UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use identity_repository::MockIdentityRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
