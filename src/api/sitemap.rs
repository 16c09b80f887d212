use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::services::sitemap_service;

/// GET /sitemap.xml
///
/// Crawler-facing index of every brand and mobile page, generated from the
/// live catalog on each request.
pub async fn serve_sitemap(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let site_url = state.config().read().await.catalog.site_url.clone();

    let brands = state.store().list_brands().await?;
    let mobiles = state.store().list_mobiles().await?;

    let xml = sitemap_service::generate(&site_url, &brands, &mobiles)
        .map_err(|e| ApiError::internal(format!("Failed to build sitemap: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}
