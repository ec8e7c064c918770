use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, LogoQuery, LogoSource, ResolvedLogo};

pub(crate) const DEFAULT_SPORTSDB_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
pub(crate) const DEFAULT_SPORTSDB_API_KEY: &str = "3";

/// TheSportsDB badge lookup
#[derive(Debug)]
pub struct SportsDbSource<C: HttpClientTrait> {
    client: C,
    base_url: String,
    api_key: String,
}

impl<C: HttpClientTrait> SportsDbSource<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_SPORTSDB_BASE_URL, DEFAULT_SPORTSDB_API_KEY)
    }

    pub fn with_base_url(
        client: C,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/{}/searchteams.php", self.base_url, self.api_key)
    }

    fn pick_badge(&self, teams: &[TeamEntry], query: &LogoQuery) -> Option<String> {
        let label = query.sport().badge_db_label();

        // Prefer an entry recorded under the requested sport; entries
        // without a badge are skipped during this scan.
        if let Some(team) = teams
            .iter()
            .find(|t| t.sport.as_deref() == Some(label) && t.badge_url().is_some())
        {
            return team.badge_url().map(str::to_string);
        }

        // Fall back to the first result's badge, if present.
        teams
            .first()
            .and_then(|t| t.badge_url())
            .map(str::to_string)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LogoSource for SportsDbSource<C> {
    async fn lookup(&self, query: &LogoQuery) -> Result<Option<ResolvedLogo>, DomainError> {
        let url = self.search_url();
        let response = self.client.get_json(&url, &[("t", query.team())]).await?;

        let parsed: SearchTeamsResponse = serde_json::from_value(response).map_err(|e| {
            DomainError::source("sportsdb", format!("Failed to parse response: {}", e))
        })?;

        let teams = match parsed.teams {
            Some(teams) if !teams.is_empty() => teams,
            _ => {
                debug!(team = %query.team(), "No badge database entries");
                return Ok(None);
            }
        };

        Ok(self
            .pick_badge(&teams, query)
            .map(|badge| ResolvedLogo::new(badge, "sportsdb")))
    }

    fn source_name(&self) -> &'static str {
        "sportsdb"
    }
}

// TheSportsDB API types

#[derive(Debug, Deserialize)]
struct SearchTeamsResponse {
    teams: Option<Vec<TeamEntry>>,
}

#[derive(Debug, Deserialize)]
struct TeamEntry {
    #[serde(rename = "strSport")]
    sport: Option<String>,
    #[serde(rename = "strTeamBadge")]
    badge: Option<String>,
}

impl TeamEntry {
    fn badge_url(&self) -> Option<&str> {
        self.badge.as_deref().filter(|b| !b.is_empty())
    }
}
