//! Logo resolution API types

use serde::{Deserialize, Serialize};

use crate::domain::{manual_search_url, LogoQuery, Resolution, Sport};

/// Query parameters for a logo resolution request
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveLogoParams {
    pub team: String,
    #[serde(default)]
    pub sport: Sport,
}

/// Resolved logo response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveLogoResponse {
    pub team: String,
    pub sport: Sport,
    /// Empty when no source produced a logo
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
}

impl ResolveLogoResponse {
    /// Build a response from a finished resolution
    pub fn from_resolution(query: &LogoQuery, resolution: &Resolution) -> Self {
        Self {
            team: query.team().to_string(),
            sport: query.sport(),
            logo_url: resolution.url().to_string(),
            source: resolution.source().map(str::to_string),
            search_url: manual_search_url(query),
        }
    }
}
