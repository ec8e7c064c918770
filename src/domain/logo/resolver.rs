//! Logo resolver - ordered source chain with first-hit short-circuit

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::{LogoQuery, LogoSource, ResolvedLogo};

/// Outcome of a single source attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Source returned a logo
    Hit,
    /// Source answered but found nothing usable
    Miss,
    /// Source failed (transport or parse error)
    Failed(String),
}

/// Result of querying a single source
#[derive(Debug, Clone)]
pub struct SourceAttempt {
    /// Source that was queried
    pub source: &'static str,
    /// What the source came back with
    pub outcome: AttemptOutcome,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Result of a full resolution pass
///
/// The caller-facing outcome is just the URL (possibly empty); the attempt
/// list is kept for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    logo: Option<ResolvedLogo>,
    attempts: Vec<SourceAttempt>,
    total_latency_ms: u64,
}

impl Resolution {
    pub fn logo(&self) -> Option<&ResolvedLogo> {
        self.logo.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.logo.is_some()
    }

    /// Resolved URL, or the empty string when nothing was found
    pub fn url(&self) -> &str {
        self.logo.as_ref().map(ResolvedLogo::url).unwrap_or("")
    }

    /// Name of the source that produced the logo, if any
    pub fn source(&self) -> Option<&'static str> {
        self.logo.as_ref().map(ResolvedLogo::source)
    }

    pub fn attempts(&self) -> &[SourceAttempt] {
        &self.attempts
    }

    pub fn total_latency_ms(&self) -> u64 {
        self.total_latency_ms
    }
}

/// Resolver that tries each source in order and stops at the first hit
///
/// Source failures never propagate to the caller; a failed source is
/// logged and the next one is tried. Exhausting the chain yields an
/// unresolved result, indistinguishable from "team has no known logo".
#[derive(Debug, Clone, Default)]
pub struct LogoResolver {
    sources: Vec<Arc<dyn LogoSource>>,
}

impl LogoResolver {
    pub fn new(sources: Vec<Arc<dyn LogoSource>>) -> Self {
        Self { sources }
    }

    /// Builder-style method to append a source to the chain
    pub fn with_source(mut self, source: Arc<dyn LogoSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.source_name()).collect()
    }

    /// Resolve a logo for the query
    ///
    /// An empty team name returns an unresolved result without touching
    /// any source.
    pub async fn resolve(&self, query: &LogoQuery) -> Resolution {
        if query.is_empty() {
            debug!("Empty team name, skipping lookup");
            return Resolution::default();
        }

        let start = Instant::now();
        let mut attempts = Vec::new();
        let mut logo = None;

        for source in &self.sources {
            let attempt_start = Instant::now();

            let outcome = match source.lookup(query).await {
                Ok(Some(resolved)) => {
                    logo = Some(resolved);
                    AttemptOutcome::Hit
                }
                Ok(None) => {
                    debug!(
                        source = source.source_name(),
                        team = %query.team(),
                        "Source found no logo"
                    );
                    AttemptOutcome::Miss
                }
                Err(e) => {
                    warn!(
                        source = source.source_name(),
                        team = %query.team(),
                        error = %e,
                        "Logo source failed"
                    );
                    AttemptOutcome::Failed(e.to_string())
                }
            };

            attempts.push(SourceAttempt {
                source: source.source_name(),
                outcome,
                latency_ms: attempt_start.elapsed().as_millis() as u64,
            });

            if logo.is_some() {
                break;
            }
        }

        Resolution {
            logo,
            attempts,
            total_latency_ms: start.elapsed().as_millis() as u64,
        }
    }
}
