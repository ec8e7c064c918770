//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Banner, BannerRepository, DomainError, LogoResolver};
use crate::infrastructure::services::{
    AddMatchRequest, BannerService, CreateBannerRequest, UpdateBannerRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub banner_service: Arc<dyn BannerServiceTrait>,
    pub logo_resolver: Arc<LogoResolver>,
}

/// Trait for banner service operations
#[async_trait::async_trait]
pub trait BannerServiceTrait: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Banner>, DomainError>;
    async fn list(&self) -> Result<Vec<Banner>, DomainError>;
    async fn create(&self, request: CreateBannerRequest) -> Result<Banner, DomainError>;
    async fn update(&self, id: &str, request: UpdateBannerRequest) -> Result<Banner, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    async fn add_match(&self, id: &str, request: AddMatchRequest) -> Result<Banner, DomainError>;
    async fn remove_match(&self, banner_id: &str, match_id: &str)
        -> Result<Banner, DomainError>;
}

// Implement the trait for the actual service

#[async_trait::async_trait]
impl<R: BannerRepository + 'static> BannerServiceTrait for BannerService<R> {
    async fn get(&self, id: &str) -> Result<Option<Banner>, DomainError> {
        BannerService::get(self, id).await
    }

    async fn list(&self) -> Result<Vec<Banner>, DomainError> {
        BannerService::list(self).await
    }

    async fn create(&self, request: CreateBannerRequest) -> Result<Banner, DomainError> {
        BannerService::create(self, request).await
    }

    async fn update(&self, id: &str, request: UpdateBannerRequest) -> Result<Banner, DomainError> {
        BannerService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        BannerService::delete(self, id).await
    }

    async fn add_match(&self, id: &str, request: AddMatchRequest) -> Result<Banner, DomainError> {
        BannerService::add_match(self, id, request).await
    }

    async fn remove_match(
        &self,
        banner_id: &str,
        match_id: &str,
    ) -> Result<Banner, DomainError> {
        BannerService::remove_match(self, banner_id, match_id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(banner_service: Arc<dyn BannerServiceTrait>, logo_resolver: Arc<LogoResolver>) -> Self {
        Self {
            banner_service,
            logo_resolver,
        }
    }
}
