//! Author sort-name canonicalization
//!
//! Display names ("Octavia Butler") are resolved to catalog sort names
//! ("Butler, Octavia") through an external metadata service. The service is
//! behind a one-method trait so tests can substitute a fixed table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::MetadataConfig,
    error::{AppError, AppResult},
};

/// External sort-name lookup for author display names
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SortNameLookup: Send + Sync {
    /// Resolve a display name; `Ok(None)` is a miss, not an error
    async fn lookup(&self, display_name: &str) -> AppResult<Option<String>>;
}

/// HTTP client for the metadata canonicalization service
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    pub fn new(config: &MetadataConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SortNameLookup for MetadataClient {
    async fn lookup(&self, display_name: &str) -> AppResult<Option<String>> {
        let url = format!("{}/canonical-sort-name", self.base_url);
        tracing::debug!("Sort-name lookup for '{}'", display_name);

        let response = self
            .client
            .get(&url)
            .query(&[("display_name", display_name)])
            .send()
            .await
            .map_err(|e| AppError::Metadata(format!("Metadata service unreachable: {}", e)))?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await.map_err(|e| {
                    AppError::Metadata(format!("Failed to read metadata response: {}", e))
                })?;
                let sort_name = body.trim();
                if sort_name.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(sort_name.to_string()))
                }
            }
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status => Err(AppError::Metadata(format!(
                "Metadata service returned {}",
                status
            ))),
        }
    }
}

/// Per-run resolver wrapping the lookup with a cache.
///
/// The cache lives exactly as long as one import run: a display name is
/// looked up at most once per run, and nothing leaks between runs.
pub struct SortNameResolver {
    lookup: Arc<dyn SortNameLookup>,
    cache: HashMap<String, String>,
}

impl SortNameResolver {
    pub fn new(lookup: Arc<dyn SortNameLookup>) -> Self {
        Self {
            lookup,
            cache: HashMap::new(),
        }
    }

    /// Resolve a display name into a sort name.
    ///
    /// Empty or absent names resolve to the empty string without a lookup
    /// call. A lookup miss falls back to the display name unchanged, on the
    /// assumption that it is already in "Last, First" order.
    pub async fn resolve(&mut self, display_name: Option<&str>) -> AppResult<String> {
        let name = match display_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => return Ok(String::new()),
        };

        if let Some(cached) = self.cache.get(&name) {
            return Ok(cached.clone());
        }

        let resolved = match self.lookup.lookup(&name).await? {
            Some(sort_name) => sort_name,
            None => {
                tracing::debug!("No canonical sort name for '{}', using it as-is", name);
                name.clone()
            }
        };
        self.cache.insert(name, resolved.clone());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_skips_lookup() {
        let mut mock = MockSortNameLookup::new();
        mock.expect_lookup().never();
        let mut resolver = SortNameResolver::new(Arc::new(mock));

        tokio_test::block_on(async {
            assert_eq!(resolver.resolve(None).await.unwrap(), "");
            assert_eq!(resolver.resolve(Some("")).await.unwrap(), "");
            assert_eq!(resolver.resolve(Some("   ")).await.unwrap(), "");
        });
    }

    #[tokio::test]
    async fn test_one_lookup_per_unique_name() {
        let mut mock = MockSortNameLookup::new();
        mock.expect_lookup()
            .withf(|name| name == "Octavia Butler")
            .times(1)
            .returning(|_| Ok(Some("Butler, Octavia".to_string())));
        let mut resolver = SortNameResolver::new(Arc::new(mock));

        for _ in 0..3 {
            let sort = resolver.resolve(Some("Octavia Butler")).await.unwrap();
            assert_eq!(sort, "Butler, Octavia");
        }
    }

    #[tokio::test]
    async fn test_miss_falls_back_to_display_name() {
        let mut mock = MockSortNameLookup::new();
        mock.expect_lookup().times(1).returning(|_| Ok(None));
        let mut resolver = SortNameResolver::new(Arc::new(mock));

        let sort = resolver.resolve(Some("Banks, Iain M.")).await.unwrap();
        assert_eq!(sort, "Banks, Iain M.");
        // The miss is cached too
        let again = resolver.resolve(Some("Banks, Iain M.")).await.unwrap();
        assert_eq!(again, "Banks, Iain M.");
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut mock = MockSortNameLookup::new();
        mock.expect_lookup()
            .returning(|_| Err(AppError::Metadata("connection refused".to_string())));
        let mut resolver = SortNameResolver::new(Arc::new(mock));

        let err = resolver.resolve(Some("Octavia Butler")).await.unwrap_err();
        assert!(matches!(err, AppError::Metadata(_)));
    }
}
