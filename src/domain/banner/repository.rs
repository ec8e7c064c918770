//! Banner repository trait

use async_trait::async_trait;

use super::{Banner, BannerId};
use crate::domain::DomainError;

/// Repository trait for Banner persistence
#[async_trait]
pub trait BannerRepository: Send + Sync + std::fmt::Debug {
    /// Get a banner by ID
    async fn get(&self, id: &BannerId) -> Result<Option<Banner>, DomainError>;

    /// Get all banners
    async fn list(&self) -> Result<Vec<Banner>, DomainError>;

    /// Create a new banner
    async fn create(&self, banner: Banner) -> Result<Banner, DomainError>;

    /// Update an existing banner
    async fn update(&self, banner: Banner) -> Result<Banner, DomainError>;

    /// Delete a banner by ID
    async fn delete(&self, id: &BannerId) -> Result<bool, DomainError>;

    /// Check if a banner exists
    async fn exists(&self, id: &BannerId) -> Result<bool, DomainError>;
}

/// In-memory implementation of BannerRepository
pub mod in_memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory banner store; drafts are per-process state
    #[derive(Debug, Default)]
    pub struct InMemoryBannerRepository {
        banners: Mutex<HashMap<BannerId, Banner>>,
    }

    impl InMemoryBannerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_banner(self, banner: Banner) -> Self {
            self.banners.lock().unwrap().insert(*banner.id(), banner);
            self
        }
    }

    #[async_trait]
    impl BannerRepository for InMemoryBannerRepository {
        async fn get(&self, id: &BannerId) -> Result<Option<Banner>, DomainError> {
            Ok(self.banners.lock().unwrap().get(id).cloned())
        }

        async fn list(&self) -> Result<Vec<Banner>, DomainError> {
            let mut banners: Vec<Banner> =
                self.banners.lock().unwrap().values().cloned().collect();
            banners.sort_by_key(|b| b.created_at());
            Ok(banners)
        }

        async fn create(&self, banner: Banner) -> Result<Banner, DomainError> {
            let id = *banner.id();

            if self.banners.lock().unwrap().contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "Banner with ID '{}' already exists",
                    id
                )));
            }

            self.banners.lock().unwrap().insert(id, banner.clone());
            Ok(banner)
        }

        async fn update(&self, banner: Banner) -> Result<Banner, DomainError> {
            let id = *banner.id();

            if !self.banners.lock().unwrap().contains_key(&id) {
                return Err(DomainError::not_found(format!("Banner '{}' not found", id)));
            }

            self.banners.lock().unwrap().insert(id, banner.clone());
            Ok(banner)
        }

        async fn delete(&self, id: &BannerId) -> Result<bool, DomainError> {
            Ok(self.banners.lock().unwrap().remove(id).is_some())
        }

        async fn exists(&self, id: &BannerId) -> Result<bool, DomainError> {
            Ok(self.banners.lock().unwrap().contains_key(id))
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of BannerRepository for testing
    #[derive(Debug, Default)]
    pub struct MockBannerRepository {
        banners: Mutex<HashMap<BannerId, Banner>>,
        error: Mutex<Option<String>>,
    }

    impl MockBannerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_banner(self, banner: Banner) -> Self {
            self.banners.lock().unwrap().insert(*banner.id(), banner);
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        fn check_error(&self) -> Result<(), DomainError> {
            if let Some(err) = self.error.lock().unwrap().as_ref() {
                return Err(DomainError::internal(err.clone()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl BannerRepository for MockBannerRepository {
        async fn get(&self, id: &BannerId) -> Result<Option<Banner>, DomainError> {
            self.check_error()?;
            Ok(self.banners.lock().unwrap().get(id).cloned())
        }

        async fn list(&self) -> Result<Vec<Banner>, DomainError> {
            self.check_error()?;
            Ok(self.banners.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, banner: Banner) -> Result<Banner, DomainError> {
            self.check_error()?;
            let id = *banner.id();

            if self.banners.lock().unwrap().contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "Banner with ID '{}' already exists",
                    id
                )));
            }

            self.banners.lock().unwrap().insert(id, banner.clone());
            Ok(banner)
        }

        async fn update(&self, banner: Banner) -> Result<Banner, DomainError> {
            self.check_error()?;
            let id = *banner.id();

            if !self.banners.lock().unwrap().contains_key(&id) {
                return Err(DomainError::not_found(format!("Banner '{}' not found", id)));
            }

            self.banners.lock().unwrap().insert(id, banner.clone());
            Ok(banner)
        }

        async fn delete(&self, id: &BannerId) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.banners.lock().unwrap().remove(id).is_some())
        }

        async fn exists(&self, id: &BannerId) -> Result<bool, DomainError> {
            self.check_error()?;
            Ok(self.banners.lock().unwrap().contains_key(id))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::banner::BannerFormat;

        #[tokio::test]
        async fn test_mock_repository_seeded() {
            let banner = Banner::new(BannerFormat::Square);
            let id = *banner.id();
            let repo = MockBannerRepository::new().with_banner(banner);

            assert!(repo.exists(&id).await.unwrap());
            assert!(repo.get(&id).await.unwrap().is_some());
        }

        #[tokio::test]
        async fn test_mock_repository_with_error() {
            let banner = Banner::new(BannerFormat::Square);
            let id = *banner.id();
            let repo = MockBannerRepository::new().with_error("Connection refused");

            let result = repo.get(&id).await;
            assert!(matches!(result, Err(DomainError::Internal { .. })));

            let result = repo.create(banner).await;
            assert!(matches!(result, Err(DomainError::Internal { .. })));

            let result = repo.list().await;
            assert!(matches!(result, Err(DomainError::Internal { .. })));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::in_memory::InMemoryBannerRepository;
    use super::*;
    use crate::domain::banner::BannerFormat;

    #[tokio::test]
    async fn test_in_memory_crud() {
        let repo = InMemoryBannerRepository::new();

        let banner = Banner::new(BannerFormat::Square);
        let id = *banner.id();

        let created = repo.create(banner).await.unwrap();
        assert_eq!(created.id(), &id);

        let fetched = repo.get(&id).await.unwrap();
        assert!(fetched.is_some());

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);

        let mut updated = fetched.unwrap();
        updated.set_format(BannerFormat::Story);
        let updated = repo.update(updated).await.unwrap();
        assert_eq!(updated.format(), BannerFormat::Story);

        assert!(repo.delete(&id).await.unwrap());
        assert!(repo.get(&id).await.unwrap().is_none());
        assert!(!repo.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_in_memory_duplicate_create() {
        let banner = Banner::new(BannerFormat::Square);
        let repo = InMemoryBannerRepository::new().with_banner(banner.clone());

        let result = repo.create(banner).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_in_memory_update_not_found() {
        let repo = InMemoryBannerRepository::new();
        let banner = Banner::new(BannerFormat::Square);

        let result = repo.update(banner).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_in_memory_list_returns_all() {
        let repo = InMemoryBannerRepository::new();

        let first = repo.create(Banner::new(BannerFormat::Square)).await.unwrap();
        let second = repo.create(Banner::new(BannerFormat::Story)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|b| b.id() == first.id()));
        assert!(all.iter().any(|b| b.id() == second.id()));
    }
}
