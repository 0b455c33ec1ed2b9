//! Shared types.

mod pagination;

pub use pagination::{PageLinks, PaginationParams};
