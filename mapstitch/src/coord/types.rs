//! Coordinate type definitions

use std::fmt;

/// Spherical Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Detail (zoom) levels supported by the quadkey tile scheme
pub const MIN_DETAIL: u8 = 1;
pub const MAX_DETAIL: u8 = 23;

/// Edge length of one map tile in pixels
pub const TILE_SIZE: u32 = 256;

/// Earth radius in meters (WGS84 semi-major axis)
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Global pixel coordinates at a given detail level.
///
/// Both axes are in [0, map_size - 1], with (0, 0) at the
/// northwest corner of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
}

/// Tile coordinates in the quadkey tile grid.
///
/// Derived from pixel coordinates by integer division by the tile
/// edge length (256). At detail level `n` both axes are in
/// [0, 2^n - 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Detail level is outside valid range (1 to 23)
    InvalidDetailLevel(u8),
    /// Quadkey is empty, too long, or contains characters other than 0-3
    InvalidQuadkey(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidDetailLevel(level) => {
                write!(
                    f,
                    "Invalid detail level: {} (must be between {} and {})",
                    level, MIN_DETAIL, MAX_DETAIL
                )
            }
            CoordError::InvalidQuadkey(quadkey) => {
                write!(
                    f,
                    "Invalid quadkey: '{}' (must contain only digits 0-3 and length <= {})",
                    quadkey, MAX_DETAIL
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
