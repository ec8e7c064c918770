//! Banner service - draft lifecycle and match management

use std::sync::Arc;

use futures::future;

use crate::domain::{
    Banner, BannerConfig, BannerFormat, BannerId, BannerRepository, DomainError, LogoQuery,
    LogoResolver, MatchEntry, MatchId, MatchOdds, Sport, TeamSlot,
};

/// Request to create a new banner draft
#[derive(Debug, Clone)]
pub struct CreateBannerRequest {
    pub format: Option<BannerFormat>,
    pub config: Option<BannerConfig>,
}

/// Request to update an existing banner draft
#[derive(Debug, Clone)]
pub struct UpdateBannerRequest {
    pub format: Option<BannerFormat>,
    pub config: Option<BannerConfig>,
}

/// Request to add a match to a banner draft
#[derive(Debug, Clone)]
pub struct AddMatchRequest {
    pub sport: Sport,
    pub home_team: String,
    pub home_logo_url: Option<String>,
    pub away_team: String,
    pub away_logo_url: Option<String>,
    pub kickoff: Option<String>,
    pub odds: Option<MatchOdds>,
}

/// Banner service for draft CRUD and match management
#[derive(Debug)]
pub struct BannerService<R: BannerRepository> {
    repository: Arc<R>,
    resolver: Arc<LogoResolver>,
}

impl<R: BannerRepository> BannerService<R> {
    /// Create a new BannerService with the given repository and resolver
    pub fn new(repository: Arc<R>, resolver: Arc<LogoResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Get a banner by ID
    pub async fn get(&self, id: &str) -> Result<Option<Banner>, DomainError> {
        let banner_id = BannerId::parse(id)?;
        self.repository.get(&banner_id).await
    }

    /// Get a banner by ID, returning an error if not found
    pub async fn get_required(&self, id: &str) -> Result<Banner, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Banner '{}' not found", id)))
    }

    /// List all banners
    pub async fn list(&self) -> Result<Vec<Banner>, DomainError> {
        self.repository.list().await
    }

    /// Create a new banner draft
    pub async fn create(&self, request: CreateBannerRequest) -> Result<Banner, DomainError> {
        let mut banner = Banner::new(request.format.unwrap_or_default());

        if let Some(config) = request.config {
            banner = banner.with_config(config);
        }

        self.repository.create(banner).await
    }

    /// Update an existing banner draft
    pub async fn update(
        &self,
        id: &str,
        request: UpdateBannerRequest,
    ) -> Result<Banner, DomainError> {
        let mut banner = self.get_required(id).await?;

        if let Some(format) = request.format {
            banner.set_format(format);
        }

        if let Some(config) = request.config {
            banner.set_config(config);
        }

        self.repository.update(banner).await
    }

    /// Delete a banner by ID
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let banner_id = BannerId::parse(id)?;
        self.repository.delete(&banner_id).await
    }

    /// Add a match to a banner, resolving missing team logos
    pub async fn add_match(
        &self,
        id: &str,
        request: AddMatchRequest,
    ) -> Result<Banner, DomainError> {
        let mut banner = self.get_required(id).await?;

        // A full banner is rejected before any logo resolution runs.
        banner.check_capacity()?;

        // Both slots resolve independently, so run them together.
        let (home, away) = future::join(
            self.team_slot(request.home_team, request.home_logo_url, request.sport),
            self.team_slot(request.away_team, request.away_logo_url, request.sport),
        )
        .await;

        let mut entry = MatchEntry::new(home, away);

        if let Some(kickoff) = request.kickoff {
            entry = entry.with_kickoff(kickoff);
        }

        if let Some(odds) = request.odds {
            entry = entry.with_odds(odds);
        }

        banner.add_match(entry)?;
        self.repository.update(banner).await
    }

    /// Remove a match from a banner
    pub async fn remove_match(
        &self,
        banner_id: &str,
        match_id: &str,
    ) -> Result<Banner, DomainError> {
        let parsed = MatchId::parse(match_id)?;
        let mut banner = self.get_required(banner_id).await?;

        if !banner.remove_match(&parsed) {
            return Err(DomainError::not_found(format!(
                "Match '{}' not found in banner '{}'",
                match_id, banner_id
            )));
        }

        self.repository.update(banner).await
    }

    /// Build a team slot, resolving the logo when none was supplied
    async fn team_slot(&self, name: String, logo_url: Option<String>, sport: Sport) -> TeamSlot {
        if let Some(url) = logo_url.filter(|u| !u.trim().is_empty()) {
            return TeamSlot::new(name).with_logo_url(url);
        }

        // Resolution uses the name as entered; the slot uppercases it
        // for display.
        let query = LogoQuery::new(&name, sport);
        let resolution = self.resolver.resolve(&query).await;
        let slot = TeamSlot::new(name);

        match resolution.logo() {
            Some(logo) => slot.with_logo_url(logo.url()),
            None => slot,
        }
    }
}
