use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::source("http", format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::source(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::source("http", format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::RwLock;

    #[derive(Debug, Clone)]
    struct MockRule {
        url: String,
        params: Vec<(String, String)>,
        result: Result<serde_json::Value, String>,
    }

    /// Recorded request for call assertions
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub url: String,
        pub query: Vec<(String, String)>,
    }

    /// Mock client matching requests against registered rules, in order.
    /// A rule matches when the URL is equal and every rule param appears
    /// in the request query.
    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        rules: RwLock<Vec<MockRule>>,
        calls: RwLock<Vec<RecordedCall>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(
            self,
            url: impl Into<String>,
            params: &[(&str, &str)],
            response: serde_json::Value,
        ) -> Self {
            self.rules.write().unwrap().push(MockRule {
                url: url.into(),
                params: own(params),
                result: Ok(response),
            });
            self
        }

        pub fn with_error(
            self,
            url: impl Into<String>,
            params: &[(&str, &str)],
            error: impl Into<String>,
        ) -> Self {
            self.rules.write().unwrap().push(MockRule {
                url: url.into(),
                params: own(params),
                result: Err(error.into()),
            });
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.read().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.read().unwrap().len()
        }
    }

    fn own(params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_json(
            &self,
            url: &str,
            query: &[(&str, &str)],
        ) -> Result<serde_json::Value, DomainError> {
            let owned_query = own(query);

            self.calls.write().unwrap().push(RecordedCall {
                url: url.to_string(),
                query: owned_query.clone(),
            });

            let rules = self.rules.read().unwrap();
            let matched = rules.iter().find(|rule| {
                rule.url == url && rule.params.iter().all(|p| owned_query.contains(p))
            });

            match matched {
                Some(rule) => match &rule.result {
                    Ok(value) => Ok(value.clone()),
                    Err(error) => Err(DomainError::source("mock", error)),
                },
                None => Err(DomainError::source(
                    "mock",
                    format!("No mock response for {} {:?}", url, query),
                )),
            }
        }
    }
}
