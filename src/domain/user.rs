//! User domain entity and related types.
//!
//! A directory User owns exactly one Address and one Company. The three
//! records are created together and cascade-deleted with the parent User.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Geographic coordinates, kept as strings to preserve the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Geo {
    #[schema(example = "-37.3159")]
    pub lat: String,
    #[schema(example = "81.1496")]
    pub lng: String,
}

/// Address owned 1:1 by a User.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Company owned 1:1 by a User.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// User directory entry with eagerly populated sub-records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// Address creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddressInput {
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "suite is required"))]
    pub suite: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "zipcode is required"))]
    pub zipcode: String,
    pub geo: Geo,
}

/// Company creation payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CompanyInput {
    #[validate(length(min = 1, message = "company name is required"))]
    pub name: String,
    #[serde(rename = "catchPhrase")]
    #[validate(length(min = 1, message = "catchPhrase is required"))]
    pub catch_phrase: String,
    #[validate(length(min = 1, message = "bs is required"))]
    pub bs: String,
}

/// User creation payload with required nested records
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    #[validate(length(min = 1, message = "Missing required field"))]
    pub name: String,
    #[validate(length(min = 1, message = "Missing required field"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required field"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Missing required field"))]
    pub website: String,
    #[validate(nested)]
    pub address: AddressInput,
    #[validate(nested)]
    pub company: CompanyInput,
}

/// Partial address update; only provided fields overwrite.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AddressUpdate {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<Geo>,
}

/// Partial company update; only provided fields overwrite.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

/// Partial user update; only provided fields overwrite.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<AddressUpdate>,
    pub company: Option<CompanyUpdate>,
}
