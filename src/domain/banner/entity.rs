//! Banner draft entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Banner identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannerId(Uuid);

impl BannerId {
    /// Generate a fresh random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not a valid banner ID", id)))
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Match identifier within a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| DomainError::invalid_id(format!("'{}' is not a valid match ID", id)))
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output aspect ratio of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerFormat {
    #[default]
    Square,
    Story,
}

impl BannerFormat {
    /// Pixel dimensions of the rendered banner
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Square => (1080, 1080),
            Self::Story => (1080, 1920),
        }
    }
}

/// Free-text captions shown around the match list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BannerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Date caption, free text
    pub date: String,

    pub footer_text1: String,
    pub footer_text2: String,
    pub footer_text3: String,
}

impl BannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_footer_texts(
        mut self,
        line1: impl Into<String>,
        line2: impl Into<String>,
        line3: impl Into<String>,
    ) -> Self {
        self.footer_text1 = line1.into();
        self.footer_text2 = line2.into();
        self.footer_text3 = line3.into();
        self
    }
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSlot {
    name: String,
    logo_url: String,
}

impl TeamSlot {
    /// Create a slot; the display name is trimmed and uppercased
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_uppercase(),
            logo_url: String::new(),
        }
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = url.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logo URL, empty when none is known
    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn set_logo_url(&mut self, url: impl Into<String>) {
        self.logo_url = url.into();
    }
}

/// Displayed match-result odds (home / draw / away)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchOdds {
    pub home: String,
    pub draw: String,
    pub away: String,
}

impl MatchOdds {
    pub fn new(
        home: impl Into<String>,
        draw: impl Into<String>,
        away: impl Into<String>,
    ) -> Self {
        Self {
            home: home.into(),
            draw: draw.into(),
            away: away.into(),
        }
    }
}

/// A single match row on the banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    id: MatchId,
    home: TeamSlot,
    away: TeamSlot,
    kickoff: String,
    odds: MatchOdds,
}

impl MatchEntry {
    pub fn new(home: TeamSlot, away: TeamSlot) -> Self {
        Self {
            id: MatchId::generate(),
            home,
            away,
            kickoff: String::new(),
            odds: MatchOdds::default(),
        }
    }

    pub fn with_kickoff(mut self, kickoff: impl Into<String>) -> Self {
        self.kickoff = kickoff.into();
        self
    }

    pub fn with_odds(mut self, odds: MatchOdds) -> Self {
        self.odds = odds;
        self
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn home(&self) -> &TeamSlot {
        &self.home
    }

    pub fn away(&self) -> &TeamSlot {
        &self.away
    }

    pub fn kickoff(&self) -> &str {
        &self.kickoff
    }

    pub fn odds(&self) -> &MatchOdds {
        &self.odds
    }
}

/// Banner draft entity holding an ordered match list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    id: BannerId,
    format: BannerFormat,
    config: BannerConfig,
    matches: Vec<MatchEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Banner {
    /// Upper bound on matches per banner
    pub const MAX_MATCHES: usize = 6;

    pub fn new(format: BannerFormat) -> Self {
        let now = Utc::now();
        Self {
            id: BannerId::generate(),
            format,
            config: BannerConfig::default(),
            matches: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_config(mut self, config: BannerConfig) -> Self {
        self.config = config;
        self
    }

    // Getters

    pub fn id(&self) -> &BannerId {
        &self.id
    }

    pub fn format(&self) -> BannerFormat {
        self.format
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    pub fn matches(&self) -> &[MatchEntry] {
        &self.matches
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators (for service layer updates)

    pub fn set_format(&mut self, format: BannerFormat) {
        self.format = format;
        self.touch();
    }

    pub fn set_config(&mut self, config: BannerConfig) {
        self.config = config;
        self.touch();
    }

    /// Check that the banner has room for another match
    pub fn check_capacity(&self) -> Result<(), DomainError> {
        if self.matches.len() >= Self::MAX_MATCHES {
            return Err(DomainError::validation(format!(
                "Banner holds at most {} matches",
                Self::MAX_MATCHES
            )));
        }

        Ok(())
    }

    /// Append a match, enforcing the per-banner cap
    pub fn add_match(&mut self, entry: MatchEntry) -> Result<(), DomainError> {
        self.check_capacity()?;

        self.matches.push(entry);
        self.touch();
        Ok(())
    }

    /// Remove a match by ID, returning whether anything was removed
    pub fn remove_match(&mut self, id: &MatchId) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id() != id);

        let removed = self.matches.len() < before;

        if removed {
            self.touch();
        }

        removed
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
