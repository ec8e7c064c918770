//! Banner domain - draft state for promotional match banners

mod entity;
mod repository;

pub use entity::{
    Banner, BannerConfig, BannerFormat, BannerId, MatchEntry, MatchId, MatchOdds, TeamSlot,
};
pub use repository::in_memory::InMemoryBannerRepository;
pub use repository::BannerRepository;

#[cfg(test)]
pub use repository::mock::MockBannerRepository;
