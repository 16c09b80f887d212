use crate::entities::{brands, prelude::*};
use crate::models::{Brand, BrandUpdate, NewBrand};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

pub struct BrandRepository {
    conn: DatabaseConnection,
}

impl BrandRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_brand(model: brands::Model) -> Brand {
        Brand {
            id: model.id,
            name: model.name,
            slug: model.slug,
            logo: model.logo,
            phone_count: model.phone_count,
            description: model.description,
            created_at: model.created_at,
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Brand>> {
        let rows = Brands::find()
            .order_by_asc(brands::Column::Name)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_brand).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> anyhow::Result<Option<Brand>> {
        let row = Brands::find()
            .filter(brands::Column::Slug.eq(slug))
            .one(&self.conn)
            .await?;

        Ok(row.map(Self::map_model_to_brand))
    }

    pub async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Brand>> {
        let row = Brands::find_by_id(id).one(&self.conn).await?;

        Ok(row.map(Self::map_model_to_brand))
    }

    pub async fn create(&self, brand: NewBrand) -> anyhow::Result<Brand> {
        let model = brands::Model {
            id: uuid::Uuid::new_v4().to_string(),
            name: brand.name,
            slug: brand.slug,
            logo: brand.logo,
            phone_count: brand.phone_count,
            description: brand.description,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let active: brands::ActiveModel = model.clone().into();
        Brands::insert(active).exec(&self.conn).await?;

        info!("Created brand: {} ({})", model.name, model.slug);
        Ok(Self::map_model_to_brand(model))
    }

    /// Applies the non-`None` fields and returns the updated record, or
    /// `None` when the id does not exist.
    pub async fn update(&self, id: &str, update: BrandUpdate) -> anyhow::Result<Option<Brand>> {
        let Some(existing) = Brands::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: brands::ActiveModel = existing.clone().into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(slug) = update.slug {
            active.slug = Set(slug);
        }
        if let Some(logo) = update.logo {
            active.logo = Set(Some(logo));
        }
        if let Some(phone_count) = update.phone_count {
            active.phone_count = Set(Some(phone_count));
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }

        // An empty patch is a no-op, not a driver error.
        if !active.is_changed() {
            return Ok(Some(Self::map_model_to_brand(existing)));
        }

        let updated = active.update(&self.conn).await?;
        Ok(Some(Self::map_model_to_brand(updated)))
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let result = Brands::delete_by_id(id).exec(&self.conn).await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed brand with ID: {}", id);
        }
        Ok(removed)
    }

    /// Refreshes the display phone count after an import pass.
    pub async fn set_phone_count(&self, slug: &str, count: u64) -> anyhow::Result<()> {
        Brands::update_many()
            .col_expr(
                brands::Column::PhoneCount,
                sea_orm::sea_query::Expr::value(count.to_string()),
            )
            .filter(brands::Column::Slug.eq(slug))
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Brands::find().count(&self.conn).await?)
    }
}
