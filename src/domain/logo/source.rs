use async_trait::async_trait;
use std::fmt::Debug;

use super::LogoQuery;
use crate::domain::DomainError;

/// A logo found by a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLogo {
    url: String,
    source: &'static str,
}

impl ResolvedLogo {
    pub fn new(url: impl Into<String>, source: &'static str) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

/// Trait for logo sources (badge database, encyclopedia scan, etc.)
#[async_trait]
pub trait LogoSource: Send + Sync + Debug {
    /// Look up a logo for the given query
    ///
    /// `Ok(None)` means the source answered but had nothing usable.
    async fn lookup(&self, query: &LogoQuery) -> Result<Option<ResolvedLogo>, DomainError>;

    /// Get the source name
    fn source_name(&self) -> &'static str;
}
