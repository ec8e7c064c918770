//! Logo resolution domain - queries, filename scoring, and the source chain

mod query;
mod resolver;
mod scoring;
mod search;
mod source;

pub use query::{LogoQuery, Sport};
pub use resolver::{AttemptOutcome, LogoResolver, Resolution, SourceAttempt};
pub use scoring::{score_filename, select_best_image};
pub use search::manual_search_url;
pub use source::{LogoSource, ResolvedLogo};

#[cfg(test)]
pub use source::mock::MockLogoSource;
