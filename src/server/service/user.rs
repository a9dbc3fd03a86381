use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::AuthContext,
    model::user::{BanUserParam, GetUsersParam, SetUserRoleParam, User, UserWithCounts},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users matching the directory filters with their listing and message counts.
    ///
    /// # Arguments
    /// - `param` - Search, role and ban state filters
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithCounts>)` - Matching users, newest first
    /// - `Err(AppError)` - Database error
    pub async fn get_users(&self, param: &GetUsersParam) -> Result<Vec<UserWithCounts>, AppError> {
        let repo = UserRepository::new(self.db);

        let users = repo.get_filtered(param).await?;
        let ids: Vec<i32> = users.iter().map(|user| user.id).collect();

        let (products, messages) = tokio::try_join!(
            repo.count_products_by_owner(&ids),
            repo.count_messages_by_sender(&ids),
        )?;

        Ok(users
            .into_iter()
            .map(|user| UserWithCounts {
                products_count: products.get(&user.id).copied().unwrap_or(0),
                messages_count: messages.get(&user.id).copied().unwrap_or(0),
                user,
            })
            .collect())
    }

    /// Replaces a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(
        &self,
        actor: &AuthContext,
        param: SetUserRoleParam,
    ) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_role(param.user_id, param.role)
            .await?
            .ok_or_else(|| user_not_found(param.user_id))?;

        tracing::info!(
            "User {} set role of user {} to {}",
            actor.user_id,
            user.id,
            user.role
        );

        Ok(user)
    }

    /// Bans a user with a reason. Listings and messages of the user are left untouched.
    ///
    /// # Returns
    /// - `Ok(User)` - The banned user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn ban(&self, actor: &AuthContext, param: BanUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_ban(param.user_id, Some(param.reason))
            .await?
            .ok_or_else(|| user_not_found(param.user_id))?;

        tracing::info!("User {} banned user {}", actor.user_id, user.id);

        Ok(user)
    }

    /// Lifts the ban of a user and clears the reason.
    ///
    /// # Returns
    /// - `Ok(User)` - The unbanned user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn unban(&self, actor: &AuthContext, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_ban(user_id, None)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        tracing::info!("User {} unbanned user {}", actor.user_id, user.id);

        Ok(user)
    }
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
