//! API request and response types

pub mod banners;
pub mod error;
pub mod logos;

pub use banners::{
    AddMatchBody, BannerResponse, BannersResponse, CreateBannerBody, MatchResponse,
    TeamSlotResponse, UpdateBannerBody,
};
pub use error::{ApiError, ApiErrorResponse};
pub use logos::{ResolveLogoParams, ResolveLogoResponse};
