use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_category_table::Category;

/// Listing categories offered by the marketplace.
const CATEGORIES: [&str; 4] = ["Cars", "Real Estate", "Fish", "Treasures"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Category::Table)
            .columns([Category::Name])
            .on_conflict(OnConflict::column(Category::Name).do_nothing().to_owned());

        for name in CATEGORIES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Category::Table)
            .and_where(Expr::col(Category::Name).is_in(CATEGORIES))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
