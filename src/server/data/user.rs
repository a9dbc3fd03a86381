//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for querying the user directory and for
//! mutating role and ban state. Stored role strings are parsed into `UserRole` at this
//! boundary; a value outside the known set surfaces as an internal error.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{LikeExpr, SimpleExpr}, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::user::{BanStatusFilter, GetUsersParam, User, UserRole},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Lists users matching the directory filters, newest first.
    ///
    /// The search string is matched case-insensitively as a literal substring of username,
    /// email or name; `%` and `_` in it match only themselves.
    ///
    /// SQLite's `LOWER` folds ASCII only, so each column is also compared against the
    /// uppercased search. That covers non-ASCII capitals such as `é` matching `Élodie`, but
    /// not arbitrary mixed-case non-ASCII input on SQLite. Postgres folds Unicode in `LOWER`.
    ///
    /// # Arguments
    /// - `param` - Search, role and ban state filters
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users ordered by creation time descending
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn get_filtered(&self, param: &GetUsersParam) -> Result<Vec<User>, AppError> {
        let mut query = entity::prelude::User::find();

        if let Some(search) = &param.search {
            let lower = contains_pattern(&search.to_lowercase());
            let upper = contains_pattern(&search.to_uppercase());

            let mut matches = Condition::any();
            for column in [
                entity::user::Column::Username,
                entity::user::Column::Email,
                entity::user::Column::Name,
            ] {
                matches = matches
                    .add(lower_like(column, &lower))
                    .add(column.like(LikeExpr::new(upper.as_str()).escape(LIKE_ESCAPE)));
            }
            query = query.filter(matches);
        }

        if let Some(role) = param.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }

        match param.status {
            BanStatusFilter::All => {}
            BanStatusFilter::Banned => {
                query = query.filter(entity::user::Column::IsBanned.eq(true));
            }
            BanStatusFilter::Active => {
                query = query.filter(entity::user::Column::IsBanned.eq(false));
            }
        }

        let entities = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Counts listings owned by each of `user_ids`.
    ///
    /// Users without listings are absent from the returned map.
    pub async fn count_products_by_owner(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Product::find()
            .select_only()
            .column(entity::product::Column::OwnerId)
            .column_as(entity::product::Column::Id.count(), "count")
            .filter(entity::product::Column::OwnerId.is_in(user_ids.iter().copied()))
            .group_by(entity::product::Column::OwnerId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(into_count_map(rows))
    }

    /// Counts messages sent by each of `user_ids`.
    ///
    /// Users without messages are absent from the returned map.
    pub async fn count_messages_by_sender(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Message::find()
            .select_only()
            .column(entity::message::Column::SenderId)
            .column_as(entity::message::Column::Id.count(), "count")
            .filter(entity::message::Column::SenderId.is_in(user_ids.iter().copied()))
            .group_by(entity::message::Column::SenderId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(into_count_map(rows))
    }

    /// Replaces the role of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn set_role(&self, user_id: i32, role: UserRole) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.role = ActiveValue::Set(role.as_str().to_string());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Bans or unbans a user.
    ///
    /// `Some(reason)` bans the user with that reason, `None` lifts the ban and clears the
    /// reason. Both columns are written in the same statement.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn set_ban(
        &self,
        user_id: i32,
        reason: Option<String>,
    ) -> Result<Option<User>, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.is_banned = ActiveValue::Set(reason.is_some());
        active_model.ban_reason = ActiveValue::Set(reason);

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Checks whether at least one user holds any of `roles`.
    pub async fn any_with_roles(&self, roles: &[UserRole]) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.is_in(roles.iter().map(|role| role.as_str())))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%term%` with the LIKE metacharacters of `term` escaped by `LIKE_ESCAPE`.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `LOWER(column) LIKE pattern ESCAPE '\'`, where `pattern` is already lowercase.
fn lower_like(column: entity::user::Column, pattern: &str) -> SimpleExpr {
    use sea_orm::sea_query::{Expr, ExprTrait, Func};

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn into_count_map(rows: Vec<(i32, i64)>) -> HashMap<i32, u64> {
    rows.into_iter()
        .map(|(id, count)| (id, count.max(0) as u64))
        .collect()
}
