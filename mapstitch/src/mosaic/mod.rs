//! Mosaic assembly
//!
//! Decodes fetched tile bytes and stitches them into one contiguous
//! raster, preserving the planner's canonical tile order.

use crate::coord::TILE_SIZE;
use crate::grid::TileGrid;
use image::{ImageReader, RgbaImage};
use std::fmt;
use std::io::Cursor;
use tracing::debug;

/// Errors that can occur during tile decoding and mosaic assembly.
#[derive(Debug)]
pub enum MosaicError {
    /// Number of rasters does not match the grid's tile count
    IncompleteTileSet { expected: usize, actual: usize },
    /// A raster's dimensions differ from the 256×256 tile size
    DimensionMismatch {
        index: usize,
        width: u32,
        height: u32,
    },
    /// Tile bytes could not be decoded as an image
    Decode(String),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::IncompleteTileSet { expected, actual } => {
                write!(
                    f,
                    "Incomplete tile set: expected {} rasters, got {}",
                    expected, actual
                )
            }
            MosaicError::DimensionMismatch {
                index,
                width,
                height,
            } => {
                write!(
                    f,
                    "Raster {} is {}×{} pixels (expected {}×{})",
                    index, width, height, TILE_SIZE, TILE_SIZE
                )
            }
            MosaicError::Decode(msg) => write!(f, "Tile decode failed: {}", msg),
        }
    }
}

impl std::error::Error for MosaicError {}

impl From<image::ImageError> for MosaicError {
    fn from(e: image::ImageError) -> Self {
        MosaicError::Decode(e.to_string())
    }
}

/// Decodes raw tile bytes (JPEG or PNG) into an RGBA raster.
///
/// # Errors
///
/// Returns `MosaicError::Decode` on malformed image data.
pub fn decode_tile(bytes: &[u8]) -> Result<RgbaImage, MosaicError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MosaicError::Decode(format!("Format detection failed: {}", e)))?
        .decode()?
        .to_rgba8();
    Ok(image)
}

/// Stitches decoded tiles into the final mosaic.
///
/// Consumes rasters in the exact order produced by the grid planner:
/// each run of `grid.rows()` consecutive tiles forms one vertical strip
/// (north to south), and strips are placed west to east. The tile at
/// grid position (row, col) occupies the pixel region
/// `[col*256, (col+1)*256) × [row*256, (row+1)*256)`.
///
/// # Errors
///
/// Returns `MosaicError::IncompleteTileSet` if the raster count does not
/// equal the grid's tile count, or `MosaicError::DimensionMismatch` if
/// any raster is not 256×256.
pub fn assemble(grid: &TileGrid, tiles: &[RgbaImage]) -> Result<RgbaImage, MosaicError> {
    if tiles.len() != grid.tile_count() {
        return Err(MosaicError::IncompleteTileSet {
            expected: grid.tile_count(),
            actual: tiles.len(),
        });
    }

    for (index, tile) in tiles.iter().enumerate() {
        if tile.width() != TILE_SIZE || tile.height() != TILE_SIZE {
            return Err(MosaicError::DimensionMismatch {
                index,
                width: tile.width(),
                height: tile.height(),
            });
        }
    }

    let width = grid.columns() * TILE_SIZE;
    let height = grid.rows() * TILE_SIZE;
    let mut canvas = RgbaImage::new(width, height);

    let rows = grid.rows() as usize;
    for (index, tile) in tiles.iter().enumerate() {
        let col = (index / rows) as u32;
        let row = (index % rows) as u32;

        let x = col * TILE_SIZE;
        let y = row * TILE_SIZE;
        image::imageops::replace(&mut canvas, tile, x.into(), y.into());
    }

    debug!(width, height, tiles = tiles.len(), "Assembled mosaic");

    Ok(canvas)
}
