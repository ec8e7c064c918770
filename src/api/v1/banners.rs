//! Banner endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    AddMatchBody, ApiError, BannerResponse, BannersResponse, CreateBannerBody, UpdateBannerBody,
};
use crate::infrastructure::services::{AddMatchRequest, CreateBannerRequest, UpdateBannerRequest};

/// GET /v1/banners
pub async fn list_banners(
    State(state): State<AppState>,
) -> Result<Json<BannersResponse>, ApiError> {
    debug!("Listing all banners");

    let banners = state.banner_service.list().await.map_err(ApiError::from)?;
    let responses = banners.iter().map(BannerResponse::from_domain).collect();

    Ok(Json(BannersResponse::new(responses)))
}

/// POST /v1/banners
pub async fn create_banner(
    State(state): State<AppState>,
    Json(request): Json<CreateBannerBody>,
) -> Result<Json<BannerResponse>, ApiError> {
    debug!("Creating banner draft");

    let create_request = CreateBannerRequest {
        format: request.format,
        config: request.config,
    };

    let banner = state
        .banner_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BannerResponse::from_domain(&banner)))
}

/// GET /v1/banners/:banner_id
pub async fn get_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<String>,
) -> Result<Json<BannerResponse>, ApiError> {
    debug!(banner_id = %banner_id, "Getting banner");

    let banner = state
        .banner_service
        .get(&banner_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Banner '{}' not found", banner_id)))?;

    Ok(Json(BannerResponse::from_domain(&banner)))
}

/// PUT /v1/banners/:banner_id
pub async fn update_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<String>,
    Json(request): Json<UpdateBannerBody>,
) -> Result<Json<BannerResponse>, ApiError> {
    debug!(banner_id = %banner_id, "Updating banner");

    let update_request = UpdateBannerRequest {
        format: request.format,
        config: request.config,
    };

    let banner = state
        .banner_service
        .update(&banner_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BannerResponse::from_domain(&banner)))
}

/// DELETE /v1/banners/:banner_id
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(banner_id = %banner_id, "Deleting banner");

    let deleted = state
        .banner_service
        .delete(&banner_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Banner '{}' not found",
            banner_id
        )));
    }

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": banner_id
    })))
}

/// POST /v1/banners/:banner_id/matches
pub async fn add_match(
    State(state): State<AppState>,
    Path(banner_id): Path<String>,
    Json(request): Json<AddMatchBody>,
) -> Result<Json<BannerResponse>, ApiError> {
    debug!(
        banner_id = %banner_id,
        home = %request.home_team,
        away = %request.away_team,
        "Adding match to banner"
    );

    let add_request = AddMatchRequest {
        sport: request.sport,
        home_team: request.home_team,
        home_logo_url: request.home_logo_url,
        away_team: request.away_team,
        away_logo_url: request.away_logo_url,
        kickoff: request.kickoff,
        odds: request.odds,
    };

    let banner = state
        .banner_service
        .add_match(&banner_id, add_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BannerResponse::from_domain(&banner)))
}

/// DELETE /v1/banners/:banner_id/matches/:match_id
pub async fn remove_match(
    State(state): State<AppState>,
    Path((banner_id, match_id)): Path<(String, String)>,
) -> Result<Json<BannerResponse>, ApiError> {
    debug!(banner_id = %banner_id, match_id = %match_id, "Removing match from banner");

    let banner = state
        .banner_service
        .remove_match(&banner_id, &match_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(BannerResponse::from_domain(&banner)))
}
