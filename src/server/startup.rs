use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError, model::user::UserRole,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Checks whether anybody is able to use the admin panel.
///
/// Promoting the first admin happens outside of this API, so only a warning is logged
/// when no admin or moderator exists.
///
/// # Returns
/// - `Ok(())` - Check completed
/// - `Err(AppError::DbErr)` - Database error during the count query
pub async fn check_for_moderators(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo
        .any_with_roles(&[UserRole::Admin, UserRole::Moderator])
        .await?
    {
        tracing::debug!("Found at least one admin or moderator");
    } else {
        tracing::warn!(
            "No admin or moderator accounts exist, set a user's role to 'admin' in the database to access the admin API"
        );
    }

    Ok(())
}
