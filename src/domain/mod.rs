//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod identity;
pub mod password;
pub mod user;

pub use identity::Identity;
pub use password::Password;
pub use user::{
    Address, AddressInput, AddressUpdate, Company, CompanyInput, CompanyUpdate, Geo, User,
    UserInput, UserUpdate,
};
