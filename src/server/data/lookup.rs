use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::lookup::Lookup;

/// Repository for the category and game server lookup tables.
pub struct LookupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LookupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories ordered by name.
    pub async fn get_categories(&self) -> Result<Vec<Lookup>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lookup::from).collect())
    }

    /// All game servers ordered by name.
    pub async fn get_servers(&self) -> Result<Vec<Lookup>, DbErr> {
        let entities = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lookup::from).collect())
    }

    /// Loads the categories with the given ids, keyed by id.
    pub async fn categories_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Lookup>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, Lookup::from(entity)))
            .collect())
    }

    /// Loads the game servers with the given ids, keyed by id.
    pub async fn servers_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Lookup>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Server::find()
            .filter(entity::server::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.id, Lookup::from(entity)))
            .collect())
    }
}

/// Sorted, deduplicated ids for batch loading.
pub(super) fn unique_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
