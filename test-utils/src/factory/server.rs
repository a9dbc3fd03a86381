//! Server factory for creating test game server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server named `"Server {id}"`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    create_server_named(db, format!("Server {}", next_id())).await
}

/// Creates a server with the given name.
pub async fn create_server_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::server::Model, DbErr> {
    entity::server::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
