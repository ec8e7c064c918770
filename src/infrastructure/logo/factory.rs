//! Resolver assembly from configuration

use std::sync::Arc;
use std::time::Duration;

use crate::config::SourcesConfig;
use crate::domain::LogoResolver;

use super::http_client::HttpClient;
use super::sportsdb::{SportsDbSource, DEFAULT_SPORTSDB_API_KEY, DEFAULT_SPORTSDB_BASE_URL};
use super::wikipedia::{WikipediaSource, DEFAULT_WIKIPEDIA_API_URL};

/// Builds the default lookup chain: badge database first, then the
/// Wikipedia image scan.
pub fn create_resolver(config: &SourcesConfig) -> LogoResolver {
    let client = match config.request_timeout_secs {
        Some(secs) => HttpClient::with_timeout(Duration::from_secs(secs)),
        None => HttpClient::new(),
    };

    let sportsdb = SportsDbSource::with_base_url(
        client.clone(),
        config
            .sportsdb_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SPORTSDB_BASE_URL),
        config
            .sportsdb_api_key
            .as_deref()
            .unwrap_or(DEFAULT_SPORTSDB_API_KEY),
    );

    let wikipedia = WikipediaSource::with_api_url(
        client,
        config
            .wikipedia_api_url
            .as_deref()
            .unwrap_or(DEFAULT_WIKIPEDIA_API_URL),
    );

    LogoResolver::default()
        .with_source(Arc::new(sportsdb))
        .with_source(Arc::new(wikipedia))
}
