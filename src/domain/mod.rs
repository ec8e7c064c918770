//! Domain layer - Core business logic and entities

pub mod banner;
pub mod error;
pub mod logo;

pub use banner::{
    Banner, BannerConfig, BannerFormat, BannerId, BannerRepository, InMemoryBannerRepository,
    MatchEntry, MatchId, MatchOdds, TeamSlot,
};
pub use error::DomainError;
pub use logo::{
    manual_search_url, score_filename, select_best_image, AttemptOutcome, LogoQuery, LogoResolver,
    LogoSource, ResolvedLogo, Resolution, SourceAttempt, Sport,
};
