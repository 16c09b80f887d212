use crate::models::{Brand, BrandUpdate, Mobile, MobileUpdate, NewBrand, NewMobile};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod fixtures;
pub mod migrator;
pub mod repositories;

pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn brand_repo(&self) -> repositories::brand::BrandRepository {
        repositories::brand::BrandRepository::new(self.conn.clone())
    }

    fn mobile_repo(&self) -> repositories::mobile::MobileRepository {
        repositories::mobile::MobileRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    // Brands

    pub async fn list_brands(&self) -> Result<Vec<Brand>> {
        self.brand_repo().list().await
    }

    pub async fn get_brand_by_slug(&self, slug: &str) -> Result<Option<Brand>> {
        self.brand_repo().get_by_slug(slug).await
    }

    pub async fn get_brand_by_id(&self, id: &str) -> Result<Option<Brand>> {
        self.brand_repo().get_by_id(id).await
    }

    pub async fn create_brand(&self, brand: NewBrand) -> Result<Brand> {
        self.brand_repo().create(brand).await
    }

    pub async fn update_brand(&self, id: &str, update: BrandUpdate) -> Result<Option<Brand>> {
        self.brand_repo().update(id, update).await
    }

    pub async fn delete_brand(&self, id: &str) -> Result<bool> {
        self.brand_repo().delete(id).await
    }

    pub async fn set_brand_phone_count(&self, slug: &str, count: u64) -> Result<()> {
        self.brand_repo().set_phone_count(slug, count).await
    }

    pub async fn count_brands(&self) -> Result<u64> {
        self.brand_repo().count().await
    }

    // Mobiles

    pub async fn list_mobiles(&self) -> Result<Vec<Mobile>> {
        self.mobile_repo().list().await
    }

    pub async fn get_mobiles_by_brand(&self, brand_slug: &str) -> Result<Vec<Mobile>> {
        self.mobile_repo().list_by_brand(brand_slug).await
    }

    pub async fn get_mobile(&self, brand_slug: &str, slug: &str) -> Result<Option<Mobile>> {
        self.mobile_repo().get(brand_slug, slug).await
    }

    pub async fn get_mobile_by_id(&self, id: &str) -> Result<Option<Mobile>> {
        self.mobile_repo().get_by_id(id).await
    }

    pub async fn search_mobiles(&self, query: &str) -> Result<Vec<Mobile>> {
        self.mobile_repo().search(query).await
    }

    pub async fn featured_mobiles(&self, limit: u64) -> Result<Vec<Mobile>> {
        self.mobile_repo().featured(limit).await
    }

    pub async fn create_mobile(&self, mobile: NewMobile) -> Result<Mobile> {
        self.mobile_repo().create(mobile).await
    }

    pub async fn upsert_mobile(&self, mobile: NewMobile) -> Result<()> {
        self.mobile_repo().upsert(mobile).await
    }

    pub async fn update_mobile(&self, id: &str, update: MobileUpdate) -> Result<Option<Mobile>> {
        self.mobile_repo().update(id, update).await
    }

    pub async fn delete_mobile(&self, id: &str) -> Result<bool> {
        self.mobile_repo().delete(id).await
    }

    pub async fn count_mobiles(&self) -> Result<u64> {
        self.mobile_repo().count().await
    }

    pub async fn count_mobiles_by_brand(&self, brand_slug: &str) -> Result<u64> {
        self.mobile_repo().count_by_brand(brand_slug).await
    }

    // Users

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<bool> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<User> {
        self.user_repo().create(username, password).await
    }

    // Seeding

    /// Seeds the demo catalog. A no-op when any brand already exists so the
    /// flag can stay enabled across restarts.
    pub async fn seed_demo_catalog(&self) -> Result<u64> {
        if self.count_brands().await? > 0 {
            info!("Catalog already populated, skipping demo seed");
            return Ok(0);
        }

        let mut seeded = 0u64;
        for brand in fixtures::demo_brands() {
            self.create_brand(brand).await?;
            seeded += 1;
        }
        for mobile in fixtures::demo_mobiles() {
            self.create_mobile(mobile).await?;
            seeded += 1;
        }

        info!("Seeded demo catalog with {} records", seeded);
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        Store::new("sqlite::memory:").await.expect("store")
    }

    #[tokio::test]
    async fn migrations_seed_the_admin_account() {
        let store = store().await;

        let admin = store
            .get_user_by_username("admin")
            .await
            .expect("query")
            .expect("admin should be seeded");
        assert_eq!(admin.username, "admin");

        assert!(store.verify_user_password("admin", "admin123").await.unwrap());
        assert!(!store.verify_user_password("admin", "wrong").await.unwrap());
        assert!(!store.verify_user_password("ghost", "admin123").await.unwrap());
    }

    #[tokio::test]
    async fn created_users_can_authenticate() {
        let store = store().await;

        let user = store.create_user("editor", "s3cret-pass").await.unwrap();
        assert_eq!(user.username, "editor");
        assert!(store.verify_user_password("editor", "s3cret-pass").await.unwrap());
    }

    #[tokio::test]
    async fn demo_seed_is_idempotent() {
        let store = store().await;

        let first = store.seed_demo_catalog().await.unwrap();
        assert!(first > 0);
        assert_eq!(store.seed_demo_catalog().await.unwrap(), 0);
        assert_eq!(store.count_brands().await.unwrap(), 6);
        assert_eq!(store.count_mobiles().await.unwrap(), 4);
    }
}
