//! Catalog management endpoints.
//!
//! These run in open-access mode; see the auth module. Payloads are taken as
//! raw JSON and pushed through the validation module so schema problems come
//! back as 400s naming the bad fields.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::{
    parse_brand_update, parse_mobile_update, parse_new_brand, parse_new_mobile,
};
use super::{ApiError, ApiResponse, AppState};
use crate::models::{Brand, Mobile};

/// POST /admin/brands
pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ApiResponse<Brand>>), ApiError> {
    let new_brand = parse_new_brand(payload)?;

    if state
        .store()
        .get_brand_by_slug(&new_brand.slug)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "Brand with slug '{}' already exists",
            new_brand.slug
        )));
    }

    let brand = state.store().create_brand(new_brand).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(brand))))
}

/// PUT /admin/brands/{id}
pub async fn update_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Brand>>, ApiError> {
    let update = parse_brand_update(payload)?;

    let brand = state
        .store()
        .update_brand(&id, update)
        .await?
        .ok_or_else(ApiError::brand_not_found)?;

    Ok(Json(ApiResponse::success(brand)))
}

/// DELETE /admin/brands/{id}
pub async fn delete_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store().delete_brand(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::brand_not_found())
    }
}

/// GET /admin/mobiles/{id}
///
/// The admin screens edit by id rather than by the public (brand, slug) pair.
pub async fn get_mobile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Mobile>>, ApiError> {
    let mobile = state
        .store()
        .get_mobile_by_id(&id)
        .await?
        .ok_or_else(ApiError::mobile_not_found)?;

    Ok(Json(ApiResponse::success(mobile)))
}

/// POST /admin/mobiles
pub async fn create_mobile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ApiResponse<Mobile>>), ApiError> {
    let new_mobile = parse_new_mobile(payload)?;

    if state
        .store()
        .get_mobile(&new_mobile.brand, &new_mobile.slug)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "Mobile with slug '{}' already exists for brand '{}'",
            new_mobile.slug, new_mobile.brand
        )));
    }

    let mobile = state.store().create_mobile(new_mobile).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(mobile))))
}

/// PUT /admin/mobiles/{id}
pub async fn update_mobile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Mobile>>, ApiError> {
    let update = parse_mobile_update(payload)?;

    let mobile = state
        .store()
        .update_mobile(&id, update)
        .await?
        .ok_or_else(ApiError::mobile_not_found)?;

    Ok(Json(ApiResponse::success(mobile)))
}

/// DELETE /admin/mobiles/{id}
pub async fn delete_mobile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store().delete_mobile(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::mobile_not_found())
    }
}
