use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::Mobile;
use crate::services::visualize_service::{self, ModelData};

#[derive(Deserialize)]
pub struct MobileQuery {
    pub brand: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

/// Lists mobiles. Filters follow the public site's precedence: brand pages
/// first, then the featured carousel, then free-text search.
pub async fn list_mobiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MobileQuery>,
) -> Result<Json<ApiResponse<Vec<Mobile>>>, ApiError> {
    let store = state.store();

    let mobiles = if let Some(brand) = params.brand.as_deref() {
        store.get_mobiles_by_brand(brand).await?
    } else if params.featured.as_deref() == Some("true") {
        let limit = state.config().read().await.catalog.featured_count;
        store.featured_mobiles(limit).await?
    } else if let Some(query) = params.search.as_deref() {
        store.search_mobiles(query).await?
    } else {
        store.list_mobiles().await?
    };

    Ok(Json(ApiResponse::success(mobiles)))
}

pub async fn get_mobile(
    State(state): State<Arc<AppState>>,
    Path((brand, slug)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Mobile>>, ApiError> {
    let mobile = state
        .store()
        .get_mobile(&brand, &slug)
        .await?
        .ok_or_else(ApiError::mobile_not_found)?;

    Ok(Json(ApiResponse::success(mobile)))
}

/// Returns the precomputed 3D payload the product page's canvas renders.
pub async fn get_model_data(
    State(state): State<Arc<AppState>>,
    Path((brand, slug)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ModelData>>, ApiError> {
    let mobile = state
        .store()
        .get_mobile(&brand, &slug)
        .await?
        .ok_or_else(ApiError::mobile_not_found)?;

    Ok(Json(ApiResponse::success(visualize_service::model_data(
        &mobile,
    ))))
}
