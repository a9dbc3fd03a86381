//! Listing data repository.
//!
//! Provides the pending listing queue joined with owners, categories and servers, and the
//! status transition used by moderators.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::lookup::{unique_ids, LookupRepository},
    error::AppError,
    model::{
        product::{
            GetPendingProductsParam, PendingProduct, Product, ProductStatus,
            SetProductStatusParam,
        },
        user::UserSummary,
    },
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a listing by id.
    #[cfg(test)]
    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, AppError> {
        let entity = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity).transpose()?)
    }

    /// Gets pending listings with their owner, category and server, newest first.
    ///
    /// Related rows are loaded in one query per table and joined in memory. A listing whose
    /// relation cannot be resolved is still returned with that relation set to `None`.
    ///
    /// # Arguments
    /// - `param` - Optional category and server filters
    ///
    /// # Returns
    /// - `Ok(Vec<PendingProduct>)` - Pending listings in creation order, newest first
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn get_pending(
        &self,
        param: &GetPendingProductsParam,
    ) -> Result<Vec<PendingProduct>, AppError> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::Status.eq(ProductStatus::Pending.as_str()));

        if let Some(category_id) = param.category_id {
            query = query.filter(entity::product::Column::CategoryId.eq(category_id));
        }
        if let Some(server_id) = param.server_id {
            query = query.filter(entity::product::Column::ServerId.eq(server_id));
        }

        let products = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        if products.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids = unique_ids(products.iter().map(|p| p.owner_id));
        let category_ids = unique_ids(products.iter().map(|p| p.category_id));
        let server_ids = unique_ids(products.iter().map(|p| p.server_id));

        let owners: HashMap<i32, UserSummary> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(owner_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, UserSummary::from(user)))
            .collect();

        let lookup_repo = LookupRepository::new(self.db);
        let categories = lookup_repo.categories_by_ids(&category_ids).await?;
        let servers = lookup_repo.servers_by_ids(&server_ids).await?;

        products
            .into_iter()
            .map(|entity| -> Result<PendingProduct, AppError> {
                let owner = owners.get(&entity.owner_id).cloned();
                let category = categories.get(&entity.category_id).cloned();
                let server = servers.get(&entity.server_id).cloned();

                Ok(PendingProduct {
                    product: Product::from_entity(entity)?,
                    owner,
                    category,
                    server,
                })
            })
            .collect()
    }

    /// Sets the moderation status and note of a listing.
    ///
    /// Any status may be set from any other. The stored note is replaced, so a `None`
    /// note clears it.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(AppError)` - Database error or unknown stored status
    pub async fn set_status(
        &self,
        param: SetProductStatusParam,
    ) -> Result<Option<Product>, AppError> {
        let Some(entity) = entity::prelude::Product::find_by_id(param.product_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(param.status.as_str().to_string());
        active_model.moderation_note = ActiveValue::Set(param.note);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)?))
    }
}
