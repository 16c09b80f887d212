//! System endpoints: the load balancer health probe and the admin
//! dashboard's status card.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
///
/// Flat body on purpose: uptime monitors match on `{"status": "ok"}`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/system/status
///
/// Uptime, version, catalog counts and database reachability.
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let store = state.store();

    let database = store.ping().await.is_ok();
    let brands = store.count_brands().await?;
    let mobiles = store.count_mobiles().await?;

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        brands,
        mobiles,
        database,
    })))
}
