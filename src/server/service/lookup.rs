use sea_orm::DatabaseConnection;

use crate::server::{data::lookup::LookupRepository, error::AppError, model::lookup::Lookup};

pub struct LookupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LookupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all listing categories
    pub async fn get_categories(&self) -> Result<Vec<Lookup>, AppError> {
        Ok(LookupRepository::new(self.db).get_categories().await?)
    }

    /// Gets all game servers
    pub async fn get_servers(&self) -> Result<Vec<Lookup>, AppError> {
        Ok(LookupRepository::new(self.db).get_servers().await?)
    }
}
