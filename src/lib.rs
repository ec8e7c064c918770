//! Matchday Banner API
//!
//! Draft state and rendering data for betting promo banners:
//! - Banner drafts holding up to six matches each
//! - Automatic team logo resolution (TheSportsDB badges, then Wikipedia)
//! - Square and story output formats
//! - Manual image-search links when every source comes up short

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::InMemoryBannerRepository;
use infrastructure::logo::create_resolver;
use infrastructure::services::BannerService;

/// Create application state with default configuration
pub fn create_app_state() -> AppState {
    create_app_state_with_config(&AppConfig::default())
}

/// Create application state from the given configuration
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let resolver = Arc::new(create_resolver(&config.sources));
    let repository = Arc::new(InMemoryBannerRepository::new());
    let banner_service = Arc::new(BannerService::new(repository, resolver.clone()));

    AppState::new(banner_service, resolver)
}
