//! Bing Maps aerial imagery provider

use super::http::AsyncHttpClient;
use super::types::{ProviderError, TileProvider};
use crate::coord::MAX_DETAIL;
use tracing::trace;

/// Bing Maps imagery provider.
///
/// Fetches aerial imagery tiles from Bing Maps using quadkey-based URLs.
pub struct BingMapsProvider<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> BingMapsProvider<C> {
    /// Creates a new BingMapsProvider with the given HTTP client.
    ///
    /// Uses the default Bing Maps base URL.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            base_url: "https://ecn.t0.tiles.virtualearth.net/tiles/a{quadkey}.jpeg?g=1".to_string(),
        }
    }

    /// Creates a new BingMapsProvider with a custom base URL.
    ///
    /// Useful for testing or using alternative Bing Maps servers.
    /// The base URL should contain `{quadkey}` as a placeholder.
    pub fn with_base_url(http_client: C, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Constructs the download URL for a given quadkey.
    fn build_url(&self, quadkey: &str) -> String {
        self.base_url.replace("{quadkey}", quadkey)
    }
}

impl<C: AsyncHttpClient> TileProvider for BingMapsProvider<C> {
    async fn fetch_tile(&self, quadkey: &str) -> Result<Vec<u8>, ProviderError> {
        // Length and alphabet must be checked before the level cast;
        // a quadkey longer than MAX_DETAIL would otherwise wrap to a
        // small level and slip past supports_detail
        if quadkey.is_empty()
            || quadkey.len() > MAX_DETAIL as usize
            || !quadkey.bytes().all(|b| (b'0'..=b'3').contains(&b))
        {
            return Err(ProviderError::InvalidQuadkey(quadkey.to_string()));
        }

        // Quadkey length is the detail level
        let level = quadkey.len() as u8;
        if !self.supports_detail(level) {
            return Err(ProviderError::UnsupportedDetailLevel(level));
        }

        let url = self.build_url(quadkey);
        trace!(quadkey, url = %url, "Fetching tile");
        self.http_client.get(&url).await
    }

    fn name(&self) -> &str {
        "Bing Maps"
    }

    fn min_detail(&self) -> u8 {
        1
    }

    fn max_detail(&self) -> u8 {
        19
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockAsyncHttpClient;

    #[test]
    fn test_provider_name() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::new(Ok(vec![])));
        assert_eq!(provider.name(), "Bing Maps");
    }

    #[test]
    fn test_supports_detail() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::new(Ok(vec![])));

        assert!(!provider.supports_detail(0));
        assert!(provider.supports_detail(1));
        assert!(provider.supports_detail(17));
        assert!(provider.supports_detail(19));
        assert!(!provider.supports_detail(20));
    }

    #[tokio::test]
    async fn test_fetch_tile_success() {
        // JPEG magic bytes
        let provider =
            BingMapsProvider::new(MockAsyncHttpClient::new(Ok(vec![0xFF, 0xD8, 0xFF, 0xE0])));

        let result = provider.fetch_tile("0231").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn test_fetch_tile_builds_quadkey_url() {
        let mock = MockAsyncHttpClient::new(Ok(vec![]));
        let requests = std::sync::Arc::clone(&mock.requests);
        let provider = BingMapsProvider::with_base_url(
            mock,
            "http://tiles.test/a{quadkey}.jpeg".to_string(),
        );

        provider.fetch_tile("213").await.unwrap();

        assert_eq!(
            requests.lock().unwrap().as_slice(),
            ["http://tiles.test/a213.jpeg"]
        );
    }

    #[tokio::test]
    async fn test_fetch_tile_unsupported_detail_level() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::new(Ok(vec![1, 2, 3])));

        // 20 characters is past the provider's maximum detail level
        let quadkey = "0".repeat(20);
        let result = provider.fetch_tile(&quadkey).await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::UnsupportedDetailLevel(20)
        ));
    }

    #[tokio::test]
    async fn test_fetch_tile_rejects_overlong_quadkey() {
        let mock = MockAsyncHttpClient::new(Ok(vec![1, 2, 3]));
        let requests = std::sync::Arc::clone(&mock.requests);
        let provider = BingMapsProvider::new(mock);

        // 257 characters: a u8 cast of the length would wrap to level 1
        // and pass the detail check, so the length guard must fire first
        let quadkey = "0".repeat(257);
        let result = provider.fetch_tile(&quadkey).await;
        assert!(matches!(
            result.unwrap_err(),
            ProviderError::InvalidQuadkey(_)
        ));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_tile_rejects_non_base4_quadkey() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::new(Ok(vec![1, 2, 3])));

        for quadkey in ["", "0124", "21a", "2-1"] {
            let result = provider.fetch_tile(quadkey).await;
            assert!(
                matches!(result, Err(ProviderError::InvalidQuadkey(_))),
                "quadkey {:?} should be rejected",
                quadkey
            );
        }
    }

    #[tokio::test]
    async fn test_fetch_tile_http_error() {
        let provider = BingMapsProvider::new(MockAsyncHttpClient::new(Err(
            ProviderError::HttpError("404 Not Found".to_string()),
        )));

        let result = provider.fetch_tile("213").await;
        assert!(matches!(result.unwrap_err(), ProviderError::HttpError(_)));
    }
}
