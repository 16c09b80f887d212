use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Brands)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Mobiles)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Slugs are only unique within a brand; the catalog routes look
        // records up by the (brand, slug) pair.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mobiles_brand_slug")
                    .table(Mobiles)
                    .col(crate::entities::mobiles::Column::Brand)
                    .col(crate::entities::mobiles::Column::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mobiles_brand")
                    .table(Mobiles)
                    .col(crate::entities::mobiles::Column::Brand)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mobiles).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands).to_owned())
            .await?;

        Ok(())
    }
}
