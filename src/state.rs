use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        if config.catalog.seed_demo_data {
            store.seed_demo_catalog().await?;
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
        })
    }

    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
