//! Provider types and traits

use std::fmt;
use std::future::Future;

/// Errors that can occur during tile fetching.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// HTTP request failed
    HttpError(String),
    /// Detail level not supported by this provider
    UnsupportedDetailLevel(u8),
    /// Quadkey is empty, too long, or contains non-base-4 characters
    InvalidQuadkey(String),
    /// Invalid response data from provider
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            ProviderError::UnsupportedDetailLevel(level) => {
                write!(f, "Detail level {} not supported by provider", level)
            }
            ProviderError::InvalidQuadkey(quadkey) => {
                write!(f, "Invalid quadkey: {}", quadkey)
            }
            ProviderError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for quadkey-addressed map tile providers.
///
/// Implementors resolve a quadkey to the raw bytes of one 256×256
/// imagery tile using non-blocking I/O. The core treats the returned
/// bytes as opaque; decoding happens at the mosaic boundary.
pub trait TileProvider: Send + Sync {
    /// Fetches the raw image bytes for one tile.
    ///
    /// # Arguments
    ///
    /// * `quadkey` - Base-4 tile address; its length is the detail level
    ///
    /// # Returns
    ///
    /// Raw image data (typically JPEG) or an error.
    fn fetch_tile(
        &self,
        quadkey: &str,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the minimum supported detail level.
    fn min_detail(&self) -> u8;

    /// Returns the maximum supported detail level.
    fn max_detail(&self) -> u8;

    /// Checks if this provider supports the given detail level.
    fn supports_detail(&self, level: u8) -> bool {
        level >= self.min_detail() && level <= self.max_detail()
    }
}
