//! Banner and logo v1 API endpoints

pub mod banners;
pub mod logos;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Logo resolution
        .route("/logos/resolve", get(logos::resolve_logo))
        // Banner drafts
        .route("/banners", get(banners::list_banners))
        .route("/banners", post(banners::create_banner))
        .route("/banners/{banner_id}", get(banners::get_banner))
        .route("/banners/{banner_id}", put(banners::update_banner))
        .route("/banners/{banner_id}", delete(banners::delete_banner))
        // Match management
        .route("/banners/{banner_id}/matches", post(banners::add_match))
        .route(
            "/banners/{banner_id}/matches/{match_id}",
            delete(banners::remove_match),
        )
}
