//! Mosaic download orchestration
//!
//! Coordinates the full pipeline: plan the tile grid for a bounding box,
//! encode quadkeys, fetch tiles concurrently, decode them, and assemble
//! the final mosaic.

mod types;

pub use types::OrchestratorError;

use crate::grid::TileGrid;
use crate::mosaic;
use crate::provider::TileProvider;
use crate::quadkey::tile_to_quadkey;
use futures::stream::{self, StreamExt, TryStreamExt};
use image::RgbaImage;
use std::sync::Arc;
use tracing::info;

/// Orchestrates concurrent fetching and assembly of a tile mosaic.
///
/// Fetches run concurrently up to a caller-supplied limit, but results
/// are always delivered to the assembler in the planner's canonical
/// order; concurrency never changes output ordering.
///
/// # Example
///
/// ```ignore
/// use mapstitch::orchestrator::MosaicOrchestrator;
/// use mapstitch::provider::{AsyncReqwestClient, BingMapsProvider};
///
/// let http_client = AsyncReqwestClient::new()?;
/// let provider = BingMapsProvider::new(http_client);
/// let orchestrator = MosaicOrchestrator::new(provider, 8);
/// let mosaic = orchestrator
///     .download_mosaic(47.7, -122.4, 47.5, -122.2, 17)
///     .await?;
/// ```
pub struct MosaicOrchestrator<P: TileProvider> {
    provider: Arc<P>,
    max_parallel: usize,
}

impl<P: TileProvider> MosaicOrchestrator<P> {
    /// Creates a new MosaicOrchestrator.
    ///
    /// # Arguments
    ///
    /// * `provider` - The tile provider to fetch imagery from
    /// * `max_parallel` - Maximum number of concurrent fetches (minimum 1)
    pub fn new(provider: P, max_parallel: usize) -> Self {
        Self {
            provider: Arc::new(provider),
            max_parallel: max_parallel.max(1),
        }
    }

    /// Builds the mosaic covering the bounding box spanned by two corner
    /// coordinates.
    ///
    /// The corners may be supplied in either order.
    pub async fn download_mosaic(
        &self,
        lat_a: f64,
        lon_a: f64,
        lat_b: f64,
        lon_b: f64,
        level: u8,
    ) -> Result<RgbaImage, OrchestratorError> {
        let grid = TileGrid::from_corners(lat_a, lon_a, lat_b, lon_b, level)?;
        self.download_grid(&grid).await
    }

    /// Builds the mosaic for a pre-planned tile grid.
    pub async fn download_grid(&self, grid: &TileGrid) -> Result<RgbaImage, OrchestratorError> {
        let level = grid.level();
        let quadkeys: Vec<String> = grid
            .tiles()
            .map(|tile| tile_to_quadkey(tile, level))
            .collect::<Result<_, _>>()?;

        info!(
            tiles = quadkeys.len(),
            columns = grid.columns(),
            rows = grid.rows(),
            level,
            parallel = self.max_parallel,
            provider = self.provider.name(),
            "Fetching tiles"
        );

        // buffered() preserves input order, so the assembler receives
        // rasters in the planner's canonical sequence; try_collect()
        // aborts on the first fetch or decode failure
        let tiles: Vec<RgbaImage> = stream::iter(quadkeys)
            .map(|quadkey| {
                let provider = Arc::clone(&self.provider);
                async move {
                    let bytes = provider.fetch_tile(&quadkey).await?;
                    let raster = mosaic::decode_tile(&bytes)?;
                    Ok::<RgbaImage, OrchestratorError>(raster)
                }
            })
            .buffered(self.max_parallel)
            .try_collect()
            .await?;

        Ok(mosaic::assemble(grid, &tiles)?)
    }
}
