//! Logo resolution endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ResolveLogoParams, ResolveLogoResponse};
use crate::domain::LogoQuery;

/// GET /v1/logos/resolve
///
/// Resolution never fails as a whole; an exhausted chain produces an
/// empty logo URL alongside a manual search link.
pub async fn resolve_logo(
    State(state): State<AppState>,
    Query(params): Query<ResolveLogoParams>,
) -> Json<ResolveLogoResponse> {
    debug!(team = %params.team, sport = %params.sport, "Resolving team logo");

    let query = LogoQuery::new(&params.team, params.sport);
    let resolution = state.logo_resolver.resolve(&query).await;

    Json(ResolveLogoResponse::from_resolution(&query, &resolution))
}
