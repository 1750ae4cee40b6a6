//! HTTP handlers for the addon URL scheme
//!
//! Resource paths end in `.json`; the id segment may be percent-encoded
//! (`%2Fseries%2Fdark.json`) or raw (`/series/dark.json`).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::manifest::Manifest;
use crate::state::AppState;

const JSON_SUFFIX: &str = ".json";

/// Addon manifest
pub async fn get_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.addon.manifest().clone())
}

/// Catalog listing: `/catalog/{type}/{id}.json` or `/catalog/{type}/{id}/{extra}.json`
///
/// Extra properties (`skip=..`, `search=..`) are accepted and ignored.
pub async fn get_catalog(
    State(state): State<AppState>,
    Path((content_type, resource)): Path<(String, String)>,
) -> Response {
    let Some(resource) = resource.strip_suffix(JSON_SUFFIX) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let catalog_id = resource.split('/').next().unwrap_or(resource);

    Json(state.addon.catalog(&content_type, catalog_id).await).into_response()
}

/// Item metadata: `/meta/{type}/{id}.json`
pub async fn get_meta(
    State(state): State<AppState>,
    Path((_content_type, resource)): Path<(String, String)>,
) -> Response {
    match resource.strip_suffix(JSON_SUFFIX) {
        Some(id) => Json(state.addon.meta(id).await).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Stream resolution: `/stream/{type}/{id}.json`
pub async fn get_streams(
    State(state): State<AppState>,
    Path((_content_type, resource)): Path<(String, String)>,
) -> Response {
    match resource.strip_suffix(JSON_SUFFIX) {
        Some(id) => Json(state.addon.streams(id).await).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
