//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod company;
pub mod identity;
pub mod user;
