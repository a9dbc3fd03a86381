use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    middleware::auth::AuthContext,
    model::product::{GetPendingProductsParam, PendingProduct, Product, SetProductStatusParam},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the pending listing queue, newest first
    pub async fn get_pending(
        &self,
        param: &GetPendingProductsParam,
    ) -> Result<Vec<PendingProduct>, AppError> {
        ProductRepository::new(self.db).get_pending(param).await
    }

    /// Moves a listing to a new moderation status.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated listing
    /// - `Err(AppError::NotFound)` - No listing with that id
    pub async fn set_status(
        &self,
        actor: &AuthContext,
        param: SetProductStatusParam,
    ) -> Result<Product, AppError> {
        let product_id = param.product_id;

        let product = ProductRepository::new(self.db)
            .set_status(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

        tracing::info!(
            "User {} set status of product {} to {}",
            actor.user_id,
            product.id,
            product.status.as_str()
        );

        Ok(product)
    }
}
