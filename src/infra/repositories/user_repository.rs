//! User directory store contract and its SeaORM implementation.
//!
//! Address and company sub-records are owned 1:1 by their user: created in the
//! same transaction, merged on update, and removed with the parent.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use serde::Deserialize;

use super::entities::{address, company, user};
use crate::domain::{Address, Company, Geo, User, UserInput, UserUpdate};
use crate::errors::{AppError, AppResult};

/// Enumerated equality filters for the user list query.
///
/// Absent fields impose no constraint; present fields AND together and match
/// exactly (no partial or fuzzy matching).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UserFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(user::Column::Name.eq(name.clone()));
        }
        if let Some(email) = &self.email {
            condition = condition.add(user::Column::Email.eq(email.clone()));
        }
        if let Some(username) = &self.username {
            condition = condition.add(user::Column::Username.eq(username.clone()));
        }
        condition
    }
}

/// User directory store boundary.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user with address and company populated (eager, not lazy)
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Bounded, ordered, filtered read: one page of users ordered by id
    /// ascending plus the total count matching the filter
    async fn find_and_count(
        &self,
        filter: &UserFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<User>, u64)>;

    /// Insert a user together with its owned address and company
    async fn insert(&self, input: UserInput) -> AppResult<User>;

    /// Partial merge; returns `None` when the id does not exist
    async fn update(&self, id: i32, update: UserUpdate) -> AppResult<Option<User>>;

    /// Remove a user and its owned sub-records; `false` when the id does not
    /// exist
    async fn remove(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed user directory store.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch the owned sub-records for `user_row` inside a transaction.
    async fn load_relations(
        txn: &DatabaseTransaction,
        user_id: i32,
    ) -> AppResult<(address::Model, company::Model)> {
        let addr = address::Entity::find()
            .filter(address::Column::UserId.eq(user_id))
            .one(txn)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} has no address row", user_id)))?;

        let comp = company::Entity::find()
            .filter(company::Column::UserId.eq(user_id))
            .one(txn)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} has no company row", user_id)))?;

        Ok((addr, comp))
    }
}

fn assemble(user: user::Model, addr: address::Model, comp: company::Model) -> User {
    User {
        id: user.id,
        name: user.name,
        username: user.username,
        email: user.email,
        phone: user.phone,
        website: user.website,
        address: Address {
            street: addr.street,
            suite: addr.suite,
            city: addr.city,
            zipcode: addr.zipcode,
            geo: Geo {
                lat: addr.geo.lat,
                lng: addr.geo.lng,
            },
        },
        company: Company {
            name: comp.name,
            catch_phrase: comp.catch_phrase,
            bs: comp.bs,
        },
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let Some(user_row) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let addr = user_row
            .find_related(address::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} has no address row", id)))?;

        let comp = user_row
            .find_related(company::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} has no company row", id)))?;

        Ok(Some(assemble(user_row, addr, comp)))
    }

    async fn find_and_count(
        &self,
        filter: &UserFilter,
        offset: u64,
        limit: u64,
    ) -> AppResult<(Vec<User>, u64)> {
        let condition = filter.condition();

        let total = user::Entity::find()
            .filter(condition.clone())
            .count(&self.db)
            .await?;

        let rows = user::Entity::find()
            .filter(condition)
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|u| u.id).collect();

        let mut addresses: HashMap<i32, address::Model> = address::Entity::find()
            .filter(address::Column::UserId.is_in(ids.clone()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| (a.user_id, a))
            .collect();

        let mut companies: HashMap<i32, company::Model> = company::Entity::find()
            .filter(company::Column::UserId.is_in(ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.user_id, c))
            .collect();

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let addr = addresses
                .remove(&row.id)
                .ok_or_else(|| AppError::internal(format!("user {} has no address row", row.id)))?;
            let comp = companies
                .remove(&row.id)
                .ok_or_else(|| AppError::internal(format!("user {} has no company row", row.id)))?;
            users.push(assemble(row, addr, comp));
        }

        Ok((users, total))
    }

    async fn insert(&self, input: UserInput) -> AppResult<User> {
        let txn = self.db.begin().await?;

        let user_row = user::ActiveModel {
            name: Set(input.name),
            username: Set(input.username),
            email: Set(input.email),
            phone: Set(input.phone),
            website: Set(input.website),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let addr = address::ActiveModel {
            user_id: Set(user_row.id),
            street: Set(input.address.street),
            suite: Set(input.address.suite),
            city: Set(input.address.city),
            zipcode: Set(input.address.zipcode),
            geo: Set(address::Geo {
                lat: input.address.geo.lat,
                lng: input.address.geo.lng,
            }),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let comp = company::ActiveModel {
            user_id: Set(user_row.id),
            name: Set(input.company.name),
            catch_phrase: Set(input.company.catch_phrase),
            bs: Set(input.company.bs),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(assemble(user_row, addr, comp))
    }

    async fn update(&self, id: i32, update: UserUpdate) -> AppResult<Option<User>> {
        let txn = self.db.begin().await?;

        let Some(user_row) = user::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let (addr_row, comp_row) = Self::load_relations(&txn, id).await?;

        // Only provided fields overwrite.
        let mut user_active = user_row.clone().into_active_model();
        let mut user_dirty = false;
        if let Some(name) = update.name {
            user_active.name = Set(name);
            user_dirty = true;
        }
        if let Some(username) = update.username {
            user_active.username = Set(username);
            user_dirty = true;
        }
        if let Some(email) = update.email {
            user_active.email = Set(email);
            user_dirty = true;
        }
        if let Some(phone) = update.phone {
            user_active.phone = Set(phone);
            user_dirty = true;
        }
        if let Some(website) = update.website {
            user_active.website = Set(website);
            user_dirty = true;
        }
        let user_row = if user_dirty {
            user_active.update(&txn).await?
        } else {
            user_row
        };

        let addr_row = if let Some(patch) = update.address {
            let mut active = addr_row.clone().into_active_model();
            let mut dirty = false;
            if let Some(street) = patch.street {
                active.street = Set(street);
                dirty = true;
            }
            if let Some(suite) = patch.suite {
                active.suite = Set(suite);
                dirty = true;
            }
            if let Some(city) = patch.city {
                active.city = Set(city);
                dirty = true;
            }
            if let Some(zipcode) = patch.zipcode {
                active.zipcode = Set(zipcode);
                dirty = true;
            }
            if let Some(geo) = patch.geo {
                active.geo = Set(address::Geo {
                    lat: geo.lat,
                    lng: geo.lng,
                });
                dirty = true;
            }
            if dirty {
                active.update(&txn).await?
            } else {
                addr_row
            }
        } else {
            addr_row
        };

        let comp_row = if let Some(patch) = update.company {
            let mut active = comp_row.clone().into_active_model();
            let mut dirty = false;
            if let Some(name) = patch.name {
                active.name = Set(name);
                dirty = true;
            }
            if let Some(catch_phrase) = patch.catch_phrase {
                active.catch_phrase = Set(catch_phrase);
                dirty = true;
            }
            if let Some(bs) = patch.bs {
                active.bs = Set(bs);
                dirty = true;
            }
            if dirty {
                active.update(&txn).await?
            } else {
                comp_row
            }
        } else {
            comp_row
        };

        txn.commit().await?;

        Ok(Some(assemble(user_row, addr_row, comp_row)))
    }

    async fn remove(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        // Cascade: owned sub-records go with the parent.
        address::Entity::delete_many()
            .filter(address::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        company::Entity::delete_many()
            .filter(company::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let result = user::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
