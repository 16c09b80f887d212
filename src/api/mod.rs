use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::state::SharedState;

mod admin;
mod assets;
mod auth;
mod brands;
mod error;
mod mobiles;
mod observability;
mod sitemap;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(60)));

    let api_router = Router::new()
        .merge(catalog_routes())
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/status", get(auth::status))
        .layer(session_layer)
        .with_state(state.clone());

    let root_router = Router::new()
        .route("/sitemap.xml", get(sitemap::serve_sitemap))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .merge(root_router)
        .fallback(assets::serve_asset)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(
            observability::security_headers_middleware,
        ))
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/brands", get(brands::list_brands))
        .route("/brands/{slug}", get(brands::get_brand))
        .route("/mobiles", get(mobiles::list_mobiles))
        .route("/mobiles/{brand}/{slug}", get(mobiles::get_mobile))
        .route(
            "/mobiles/{brand}/{slug}/model",
            get(mobiles::get_model_data),
        )
        .route("/admin/brands", post(admin::create_brand))
        .route("/admin/brands/{id}", put(admin::update_brand))
        .route("/admin/brands/{id}", delete(admin::delete_brand))
        .route("/admin/mobiles", post(admin::create_mobile))
        .route("/admin/mobiles/{id}", get(admin::get_mobile))
        .route("/admin/mobiles/{id}", put(admin::update_mobile))
        .route("/admin/mobiles/{id}", delete(admin::delete_mobile))
        .route("/health", get(system::health))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
}
