//! Logo source implementations

mod factory;
mod http_client;
mod sportsdb;
mod wikipedia;

pub use factory::create_resolver;
pub use http_client::{HttpClient, HttpClientTrait};
pub use sportsdb::SportsDbSource;
pub use wikipedia::WikipediaSource;
