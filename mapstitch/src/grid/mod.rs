//! Tile grid planning
//!
//! Computes the rectangular set of tiles covering a geographic bounding
//! box and yields them in the canonical stitching order consumed by the
//! mosaic assembler.

use crate::coord::{lat_lon_to_tile, CoordError, TileCoord};
use tracing::debug;

/// An axis-aligned, inclusive rectangle of tile coordinates at a fixed
/// detail level.
///
/// Tiles are yielded in canonical order: columns west to east, and
/// within each column rows north to south. Each contiguous run of
/// `rows()` tiles therefore forms one vertical strip of the mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    min: TileCoord,
    max: TileCoord,
    level: u8,
}

impl TileGrid {
    /// Plans the grid covering the bounding box spanned by two corner
    /// coordinates.
    ///
    /// The corners may be supplied in any order (northwest/southeast,
    /// southeast/northwest, or any other diagonal); the bounding
    /// rectangle is normalized by taking min/max independently per axis.
    ///
    /// # Errors
    ///
    /// Returns `CoordError::InvalidDetailLevel` if `level` is outside
    /// [1, 23].
    pub fn from_corners(
        lat_a: f64,
        lon_a: f64,
        lat_b: f64,
        lon_b: f64,
        level: u8,
    ) -> Result<Self, CoordError> {
        let a = lat_lon_to_tile(lat_a, lon_a, level)?;
        let b = lat_lon_to_tile(lat_b, lon_b, level)?;
        Ok(Self::from_tiles(a, b, level))
    }

    /// Builds the grid spanned by two tile coordinates, normalizing
    /// corner order per axis.
    pub fn from_tiles(a: TileCoord, b: TileCoord, level: u8) -> Self {
        let grid = Self {
            min: TileCoord {
                x: a.x.min(b.x),
                y: a.y.min(b.y),
            },
            max: TileCoord {
                x: a.x.max(b.x),
                y: a.y.max(b.y),
            },
            level,
        };

        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            tiles = grid.tile_count(),
            level,
            "Planned tile grid"
        );

        grid
    }

    /// Northwest corner tile of the grid.
    pub fn min(&self) -> TileCoord {
        self.min
    }

    /// Southeast corner tile of the grid (inclusive).
    pub fn max(&self) -> TileCoord {
        self.max
    }

    /// Detail level of every tile in the grid.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Number of tile columns (west-east extent).
    pub fn columns(&self) -> u32 {
        self.max.x - self.min.x + 1
    }

    /// Number of tile rows (north-south extent).
    pub fn rows(&self) -> u32 {
        self.max.y - self.min.y + 1
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Returns an iterator over every tile in canonical order.
    pub fn tiles(&self) -> TileGridIterator {
        TileGridIterator {
            grid: *self,
            current: 0,
        }
    }
}

/// Iterator over all tiles in a grid.
///
/// Yields tiles column by column, north to south within each column.
#[derive(Debug, Clone)]
pub struct TileGridIterator {
    grid: TileGrid,
    current: usize,
}

impl Iterator for TileGridIterator {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.grid.tile_count() {
            return None;
        }

        let rows = self.grid.rows() as usize;
        let col = (self.current / rows) as u32;
        let row = (self.current % rows) as u32;

        self.current += 1;

        Some(TileCoord {
            x: self.grid.min.x + col,
            y: self.grid.min.y + row,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.tile_count() - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileGridIterator {
    fn len(&self) -> usize {
        self.grid.tile_count() - self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tile_grid() {
        let tile = TileCoord { x: 5, y: 9 };
        let grid = TileGrid::from_tiles(tile, tile, 4);

        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.tile_count(), 1);
        assert_eq!(grid.tiles().collect::<Vec<_>>(), vec![tile]);
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = TileGrid::from_tiles(TileCoord { x: 2, y: 3 }, TileCoord { x: 4, y: 7 }, 5);

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.tile_count(), 15);
        assert_eq!(grid.min(), TileCoord { x: 2, y: 3 });
        assert_eq!(grid.max(), TileCoord { x: 4, y: 7 });
    }

    #[test]
    fn test_corner_order_is_normalized() {
        // All four diagonal orderings describe the same rectangle
        let nw = TileCoord { x: 2, y: 3 };
        let se = TileCoord { x: 4, y: 7 };
        let ne = TileCoord { x: 4, y: 3 };
        let sw = TileCoord { x: 2, y: 7 };

        let reference = TileGrid::from_tiles(nw, se, 5);
        assert_eq!(TileGrid::from_tiles(se, nw, 5), reference);
        assert_eq!(TileGrid::from_tiles(ne, sw, 5), reference);
        assert_eq!(TileGrid::from_tiles(sw, ne, 5), reference);
    }

    #[test]
    fn test_canonical_order_is_column_major() {
        let grid = TileGrid::from_tiles(TileCoord { x: 10, y: 20 }, TileCoord { x: 11, y: 21 }, 6);

        let tiles: Vec<_> = grid.tiles().collect();
        assert_eq!(
            tiles,
            vec![
                TileCoord { x: 10, y: 20 },
                TileCoord { x: 10, y: 21 },
                TileCoord { x: 11, y: 20 },
                TileCoord { x: 11, y: 21 },
            ]
        );
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let grid = TileGrid::from_tiles(TileCoord { x: 0, y: 0 }, TileCoord { x: 3, y: 2 }, 3);

        let mut iter = grid.tiles();
        assert_eq!(iter.len(), 12);
        iter.next();
        assert_eq!(iter.len(), 11);
        assert_eq!(iter.count(), 11);
    }

    #[test]
    fn test_from_corners_swapped_inputs_agree() {
        // Seattle-ish box supplied in both corner orders
        let a = TileGrid::from_corners(47.7, -122.4, 47.5, -122.2, 12).unwrap();
        let b = TileGrid::from_corners(47.5, -122.2, 47.7, -122.4, 12).unwrap();

        assert_eq!(a, b);
        assert!(a.tile_count() >= 1);
    }

    #[test]
    fn test_from_corners_invalid_level() {
        let result = TileGrid::from_corners(47.7, -122.4, 47.5, -122.2, 0);
        assert!(matches!(
            result.unwrap_err(),
            CoordError::InvalidDetailLevel(0)
        ));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_count_matches_rectangle(
                ax in 0u32..1000,
                ay in 0u32..1000,
                bx in 0u32..1000,
                by in 0u32..1000
            ) {
                let grid = TileGrid::from_tiles(
                    TileCoord { x: ax, y: ay },
                    TileCoord { x: bx, y: by },
                    17,
                );

                let expected = (ax.max(bx) - ax.min(bx) + 1) as usize
                    * (ay.max(by) - ay.min(by) + 1) as usize;

                prop_assert_eq!(grid.tile_count(), expected);
                prop_assert_eq!(grid.tiles().count(), expected);
            }

            #[test]
            fn test_all_tiles_within_bounds(
                ax in 0u32..100,
                ay in 0u32..100,
                bx in 0u32..100,
                by in 0u32..100
            ) {
                let grid = TileGrid::from_tiles(
                    TileCoord { x: ax, y: ay },
                    TileCoord { x: bx, y: by },
                    10,
                );

                for tile in grid.tiles() {
                    prop_assert!(tile.x >= grid.min().x && tile.x <= grid.max().x);
                    prop_assert!(tile.y >= grid.min().y && tile.y <= grid.max().y);
                }
            }

            #[test]
            fn test_no_duplicate_tiles(
                ax in 0u32..30,
                ay in 0u32..30,
                bx in 0u32..30,
                by in 0u32..30
            ) {
                let grid = TileGrid::from_tiles(
                    TileCoord { x: ax, y: ay },
                    TileCoord { x: bx, y: by },
                    8,
                );

                let mut seen = std::collections::HashSet::new();
                for tile in grid.tiles() {
                    prop_assert!(seen.insert(tile), "Duplicate tile {}", tile);
                }
                prop_assert_eq!(seen.len(), grid.tile_count());
            }
        }
    }
}
