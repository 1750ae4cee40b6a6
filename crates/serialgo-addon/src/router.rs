use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{handlers, state::AppState};

/// Build the addon router: manifest, catalog, meta and stream routes with
/// permissive CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/manifest.json", get(handlers::get_manifest))
        .route("/catalog/{content_type}/{*resource}", get(handlers::get_catalog))
        .route("/meta/{content_type}/{*resource}", get(handlers::get_meta))
        .route("/stream/{content_type}/{*resource}", get(handlers::get_streams))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
