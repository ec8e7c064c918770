use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::{select_best_image, DomainError, LogoQuery, LogoSource, ResolvedLogo};

pub(crate) const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Wikipedia image scan.
///
/// Tries up to three searches, from most to least specific, and for each
/// one walks article lookup, image listing and image URL expansion. The
/// first search that yields a positively scored image wins.
#[derive(Debug)]
pub struct WikipediaSource<C: HttpClientTrait> {
    client: C,
    api_url: String,
}

impl<C: HttpClientTrait> WikipediaSource<C> {
    pub fn new(client: C) -> Self {
        Self::with_api_url(client, DEFAULT_WIKIPEDIA_API_URL)
    }

    pub fn with_api_url(client: C, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn try_search(&self, search: &str) -> Result<Option<ResolvedLogo>, DomainError> {
        let Some(title) = self.find_article(search).await? else {
            return Ok(None);
        };

        let Some(images) = self.list_images(&title).await? else {
            debug!(article = %title, "Article has no images");
            return Ok(None);
        };

        let titles = images.iter().map(|image| image.title.as_str());
        let Some(winner) = select_best_image(titles) else {
            debug!(article = %title, "No image scored above zero");
            return Ok(None);
        };

        self.image_url(winner).await
    }

    async fn find_article(&self, search: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .get_json(
                &self.api_url,
                &[
                    ("action", "opensearch"),
                    ("search", search),
                    ("limit", "1"),
                    ("namespace", "0"),
                    ("format", "json"),
                ],
            )
            .await?;

        // Opensearch replies with [search, titles, descriptions, urls].
        let title = response
            .get(1)
            .and_then(|titles| titles.as_array())
            .and_then(|titles| titles.first())
            .and_then(|title| title.as_str())
            .map(str::to_string);

        Ok(title)
    }

    async fn list_images(&self, title: &str) -> Result<Option<Vec<ImageTitle>>, DomainError> {
        let response = self
            .client
            .get_json(
                &self.api_url,
                &[
                    ("action", "query"),
                    ("prop", "images"),
                    ("titles", title),
                    ("imlimit", "50"),
                    ("format", "json"),
                ],
            )
            .await?;

        let parsed: ImageListResponse = serde_json::from_value(response).map_err(|e| {
            DomainError::source("wikipedia", format!("Failed to parse image list: {}", e))
        })?;

        Ok(parsed
            .query
            .and_then(|query| query.pages.into_values().next())
            .and_then(|page| page.images)
            .filter(|images| !images.is_empty()))
    }

    async fn image_url(&self, file_title: &str) -> Result<Option<ResolvedLogo>, DomainError> {
        let response = self
            .client
            .get_json(
                &self.api_url,
                &[
                    ("action", "query"),
                    ("prop", "imageinfo"),
                    ("iiprop", "url"),
                    ("titles", file_title),
                    ("format", "json"),
                ],
            )
            .await?;

        let parsed: ImageInfoResponse = serde_json::from_value(response).map_err(|e| {
            DomainError::source("wikipedia", format!("Failed to parse image info: {}", e))
        })?;

        Ok(parsed
            .query
            .and_then(|query| query.pages.into_values().next())
            .and_then(|page| page.imageinfo)
            .and_then(|infos| infos.into_iter().next())
            .map(|info| ResolvedLogo::new(info.url, "wikipedia")))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LogoSource for WikipediaSource<C> {
    async fn lookup(&self, query: &LogoQuery) -> Result<Option<ResolvedLogo>, DomainError> {
        for search in query.search_queries() {
            match self.try_search(&search).await {
                Ok(Some(logo)) => return Ok(Some(logo)),
                Ok(None) => {
                    debug!(%search, "Search yielded no usable image");
                }
                Err(e) => {
                    warn!(%search, error = %e, "Wikipedia search failed");
                }
            }
        }

        Ok(None)
    }

    fn source_name(&self) -> &'static str {
        "wikipedia"
    }
}

// MediaWiki API types

#[derive(Debug, Deserialize)]
struct ImageListResponse {
    query: Option<ImageListQuery>,
}

#[derive(Debug, Deserialize)]
struct ImageListQuery {
    pages: HashMap<String, ImageListPage>,
}

#[derive(Debug, Deserialize)]
struct ImageListPage {
    images: Option<Vec<ImageTitle>>,
}

#[derive(Debug, Deserialize)]
struct ImageTitle {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImageInfoResponse {
    query: Option<ImageInfoQuery>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoQuery {
    pages: HashMap<String, ImageInfoPage>,
}

#[derive(Debug, Deserialize)]
struct ImageInfoPage {
    imageinfo: Option<Vec<ImageInfo>>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: String,
}
