use crate::entities::{mobiles, prelude::*};
use crate::models::{Mobile, MobileUpdate, NewMobile};
use sea_orm::sea_query::{Expr, Func, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

pub struct MobileRepository {
    conn: DatabaseConnection,
}

impl MobileRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_mobile(model: mobiles::Model) -> Mobile {
        Mobile {
            id: model.id,
            slug: model.slug,
            name: model.name,
            brand: model.brand,
            model: model.model,
            image_url: model.image_url,
            imagekit_path: model.imagekit_path,
            release_date: model.release_date,
            price: model.price,
            short_specs: serde_json::from_str(&model.short_specs).unwrap_or_default(),
            carousel_images: model
                .carousel_images
                .and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default(),
            specifications: serde_json::from_str(&model.specifications).unwrap_or_default(),
            dimensions: model.dimensions.and_then(|s| serde_json::from_str(&s).ok()),
            build_materials: model
                .build_materials
                .and_then(|s| serde_json::from_str(&s).ok()),
            created_at: model.created_at,
        }
    }

    fn build_model(mobile: NewMobile) -> anyhow::Result<mobiles::Model> {
        Ok(mobiles::Model {
            id: uuid::Uuid::new_v4().to_string(),
            slug: mobile.slug,
            name: mobile.name,
            brand: mobile.brand,
            model: mobile.model,
            image_url: mobile.image_url,
            imagekit_path: mobile.imagekit_path,
            release_date: mobile.release_date,
            price: mobile.price,
            short_specs: serde_json::to_string(&mobile.short_specs)?,
            carousel_images: Some(serde_json::to_string(&mobile.carousel_images)?),
            specifications: serde_json::to_string(&mobile.specifications)?,
            dimensions: mobile
                .dimensions
                .as_ref()
                .and_then(|d| serde_json::to_string(d).ok()),
            build_materials: mobile
                .build_materials
                .as_ref()
                .and_then(|m| serde_json::to_string(m).ok()),
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Mobile>> {
        let rows = Mobiles::find()
            .order_by_asc(mobiles::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_mobile).collect())
    }

    pub async fn list_by_brand(&self, brand_slug: &str) -> anyhow::Result<Vec<Mobile>> {
        let rows = Mobiles::find()
            .filter(mobiles::Column::Brand.eq(brand_slug))
            .order_by_asc(mobiles::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_mobile).collect())
    }

    pub async fn get(&self, brand_slug: &str, slug: &str) -> anyhow::Result<Option<Mobile>> {
        let row = Mobiles::find()
            .filter(mobiles::Column::Brand.eq(brand_slug))
            .filter(mobiles::Column::Slug.eq(slug))
            .one(&self.conn)
            .await?;

        Ok(row.map(Self::map_model_to_mobile))
    }

    pub async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Mobile>> {
        let row = Mobiles::find_by_id(id).one(&self.conn).await?;

        Ok(row.map(Self::map_model_to_mobile))
    }

    /// Case-insensitive substring match over name, brand, and model.
    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<Mobile>> {
        let pattern = format!("%{}%", query.to_lowercase());

        let rows = Mobiles::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(mobiles::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(mobiles::Column::Brand)))
                            .like(pattern.clone()),
                    )
                    .add(Expr::expr(Func::lower(Expr::col(mobiles::Column::Model))).like(pattern)),
            )
            .order_by_asc(mobiles::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_mobile).collect())
    }

    /// The first `limit` records in insertion order, matching the landing
    /// page's "featured" strip.
    pub async fn featured(&self, limit: u64) -> anyhow::Result<Vec<Mobile>> {
        let rows = Mobiles::find()
            .order_by_asc(mobiles::Column::CreatedAt)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_mobile).collect())
    }

    pub async fn create(&self, mobile: NewMobile) -> anyhow::Result<Mobile> {
        let model = Self::build_model(mobile)?;

        let active: mobiles::ActiveModel = model.clone().into();
        Mobiles::insert(active).exec(&self.conn).await?;

        info!("Created mobile: {} ({}/{})", model.name, model.brand, model.slug);
        Ok(Self::map_model_to_mobile(model))
    }

    /// Insert keyed on (brand, slug); an existing record is refreshed in
    /// place, keeping its id. Used by the import pipeline for re-runs.
    pub async fn upsert(&self, mobile: NewMobile) -> anyhow::Result<()> {
        let model = Self::build_model(mobile)?;
        let active: mobiles::ActiveModel = model.into();

        Mobiles::insert(active)
            .on_conflict(
                OnConflict::columns([mobiles::Column::Brand, mobiles::Column::Slug])
                    .update_columns([
                        mobiles::Column::Name,
                        mobiles::Column::Model,
                        mobiles::Column::ImageUrl,
                        mobiles::Column::ImagekitPath,
                        mobiles::Column::ReleaseDate,
                        mobiles::Column::Price,
                        mobiles::Column::ShortSpecs,
                        mobiles::Column::CarouselImages,
                        mobiles::Column::Specifications,
                        mobiles::Column::Dimensions,
                        mobiles::Column::BuildMaterials,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    /// Applies the non-`None` fields and returns the updated record, or
    /// `None` when the id does not exist.
    pub async fn update(&self, id: &str, update: MobileUpdate) -> anyhow::Result<Option<Mobile>> {
        let Some(existing) = Mobiles::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: mobiles::ActiveModel = existing.clone().into();
        if let Some(slug) = update.slug {
            active.slug = Set(slug);
        }
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(brand) = update.brand {
            active.brand = Set(brand);
        }
        if let Some(model) = update.model {
            active.model = Set(model);
        }
        if let Some(image_url) = update.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(imagekit_path) = update.imagekit_path {
            active.imagekit_path = Set(Some(imagekit_path));
        }
        if let Some(release_date) = update.release_date {
            active.release_date = Set(release_date);
        }
        if let Some(price) = update.price {
            active.price = Set(Some(price));
        }
        if let Some(short_specs) = update.short_specs {
            active.short_specs = Set(serde_json::to_string(&short_specs)?);
        }
        if let Some(carousel_images) = update.carousel_images {
            active.carousel_images = Set(Some(serde_json::to_string(&carousel_images)?));
        }
        if let Some(specifications) = update.specifications {
            active.specifications = Set(serde_json::to_string(&specifications)?);
        }
        if let Some(dimensions) = update.dimensions {
            active.dimensions = Set(Some(serde_json::to_string(&dimensions)?));
        }
        if let Some(build_materials) = update.build_materials {
            active.build_materials = Set(Some(serde_json::to_string(&build_materials)?));
        }

        // An empty patch is a no-op, not a driver error.
        if !active.is_changed() {
            return Ok(Some(Self::map_model_to_mobile(existing)));
        }

        let updated = active.update(&self.conn).await?;
        Ok(Some(Self::map_model_to_mobile(updated)))
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        let result = Mobiles::delete_by_id(id).exec(&self.conn).await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed mobile with ID: {}", id);
        }
        Ok(removed)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Mobiles::find().count(&self.conn).await?)
    }

    pub async fn count_by_brand(&self, brand_slug: &str) -> anyhow::Result<u64> {
        Ok(Mobiles::find()
            .filter(mobiles::Column::Brand.eq(brand_slug))
            .count(&self.conn)
            .await?)
    }
}
