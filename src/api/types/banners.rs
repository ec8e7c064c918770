//! Banner API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Banner, BannerConfig, BannerFormat, MatchEntry, MatchOdds, Sport, TeamSlot};

/// Request body for creating a banner draft
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateBannerBody {
    pub format: Option<BannerFormat>,
    pub config: Option<BannerConfig>,
}

/// Request body for updating a banner draft
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateBannerBody {
    pub format: Option<BannerFormat>,
    pub config: Option<BannerConfig>,
}

/// Request body for adding a match to a banner
#[derive(Debug, Clone, Deserialize)]
pub struct AddMatchBody {
    #[serde(default)]
    pub sport: Sport,
    pub home_team: String,
    pub home_logo_url: Option<String>,
    pub away_team: String,
    pub away_logo_url: Option<String>,
    pub kickoff: Option<String>,
    pub odds: Option<MatchOdds>,
}

/// One side of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSlotResponse {
    pub name: String,
    /// Empty when no logo is known
    pub logo_url: String,
}

impl TeamSlotResponse {
    pub fn from_domain(slot: &TeamSlot) -> Self {
        Self {
            name: slot.name().to_string(),
            logo_url: slot.logo_url().to_string(),
        }
    }
}

/// A match row on a banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub id: String,
    pub home: TeamSlotResponse,
    pub away: TeamSlotResponse,
    pub kickoff: String,
    pub odds: MatchOdds,
}

impl MatchResponse {
    pub fn from_domain(entry: &MatchEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            home: TeamSlotResponse::from_domain(entry.home()),
            away: TeamSlotResponse::from_domain(entry.away()),
            kickoff: entry.kickoff().to_string(),
            odds: entry.odds().clone(),
        }
    }
}

/// Banner draft representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub id: String,
    pub format: BannerFormat,
    pub width: u32,
    pub height: u32,
    pub config: BannerConfig,
    pub matches: Vec<MatchResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BannerResponse {
    /// Create a response from the domain entity
    pub fn from_domain(banner: &Banner) -> Self {
        let (width, height) = banner.format().dimensions();

        Self {
            id: banner.id().to_string(),
            format: banner.format(),
            width,
            height,
            config: banner.config().clone(),
            matches: banner
                .matches()
                .iter()
                .map(MatchResponse::from_domain)
                .collect(),
            created_at: banner.created_at(),
            updated_at: banner.updated_at(),
        }
    }
}

/// List banners response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannersResponse {
    pub banners: Vec<BannerResponse>,
}

impl BannersResponse {
    /// Create a new banners response
    pub fn new(banners: Vec<BannerResponse>) -> Self {
        Self { banners }
    }
}
