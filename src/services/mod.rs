//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and store access to fulfill application
//! use cases. They depend on store traits for dependency inversion, so tests
//! can substitute in-memory fakes.

mod auth_service;
mod token_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use token_service::{Claims, TokenService};
pub use user_service::{UserDirectory, UserService};
