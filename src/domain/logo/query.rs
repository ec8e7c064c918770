//! Logo lookup query types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Sport category for a team lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Football,
    Basketball,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Basketball => "basketball",
        }
    }

    /// Sport label as recorded by the badge database
    pub fn badge_db_label(&self) -> &'static str {
        match self {
            Self::Football => "Soccer",
            Self::Basketball => "Basketball",
        }
    }
}

impl std::str::FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "football" => Ok(Self::Football),
            "basketball" => Ok(Self::Basketball),
            other => Err(DomainError::validation(format!(
                "Unknown sport '{}', expected 'football' or 'basketball'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single logo lookup request
///
/// The team name is trimmed on construction; lookups against the external
/// services are case-insensitive on their side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoQuery {
    team: String,
    sport: Sport,
}

impl LogoQuery {
    pub fn new(team: impl Into<String>, sport: Sport) -> Self {
        Self {
            team: team.into().trim().to_string(),
            sport,
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    /// Whether the query has no team name to look up
    pub fn is_empty(&self) -> bool {
        self.team.is_empty()
    }

    /// Disambiguation queries for the encyclopedia title search, most
    /// specific first
    pub fn search_queries(&self) -> Vec<String> {
        vec![
            format!("{} {} club", self.team, self.sport),
            format!("{} {}", self.team, self.sport),
            self.team.clone(),
        ]
    }
}
