use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::Brand;

pub async fn list_brands(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Brand>>>, ApiError> {
    let brands = state.store().list_brands().await?;
    Ok(Json(ApiResponse::success(brands)))
}

pub async fn get_brand(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Brand>>, ApiError> {
    let brand = state
        .store()
        .get_brand_by_slug(&slug)
        .await?
        .ok_or_else(ApiError::brand_not_found)?;

    Ok(Json(ApiResponse::success(brand)))
}
