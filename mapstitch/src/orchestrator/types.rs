//! Orchestrator error types

use crate::coord::CoordError;
use crate::mosaic::MosaicError;
use crate::provider::ProviderError;
use thiserror::Error;

/// Errors that can occur while building a mosaic.
///
/// Any failure aborts the whole pipeline before assembly; no partial
/// mosaic is ever produced.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Coordinate conversion or quadkey encoding failed
    #[error("Coordinate error: {0}")]
    Coord(#[from] CoordError),
    /// A tile fetch failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] ProviderError),
    /// Tile decoding or mosaic assembly failed
    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),
}
