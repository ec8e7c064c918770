//! Infrastructure services

mod banner_service;

pub use banner_service::{AddMatchRequest, BannerService, CreateBannerRequest, UpdateBannerRequest};
