//! Map tile provider abstraction
//!
//! Provides traits and implementations for fetching quadkey-addressed
//! imagery tiles over HTTP. The HTTP client sits behind its own trait so
//! tests can run against mocks.

mod bing;
mod http;
mod types;

pub use bing::BingMapsProvider;
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
