//! Identity - an authentication record, distinct from a directory User.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered identity in the credential store.
///
/// Created on registration; never mutated except timestamps and never
/// deleted by any exposed operation. The email is unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
