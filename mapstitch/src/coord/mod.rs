//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and the spherical Mercator pixel/tile grid used by quadkey-addressed
//! imagery providers.

mod types;

pub use types::{
    CoordError, PixelCoord, TileCoord, EARTH_RADIUS, MAX_DETAIL, MAX_LAT, MAX_LON, MIN_DETAIL,
    MIN_LAT, MIN_LON, TILE_SIZE,
};

use std::f64::consts::PI;

/// Clamps a value into [min, max].
#[inline]
fn clip(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Returns the width and height of the map in pixels at the given
/// detail level (`256 << level`).
///
/// # Errors
///
/// Returns `CoordError::InvalidDetailLevel` if `level` is outside [1, 23].
#[inline]
pub fn map_size(level: u8) -> Result<u32, CoordError> {
    if !(MIN_DETAIL..=MAX_DETAIL).contains(&level) {
        return Err(CoordError::InvalidDetailLevel(level));
    }
    Ok(TILE_SIZE << level)
}

/// Converts geographic coordinates to global pixel coordinates.
///
/// Latitude and longitude are clipped into the valid Mercator range
/// before projecting; out-of-range values never reach the projection
/// math. The mapping is monotonic: increasing longitude never decreases
/// `x`, increasing latitude never increases `y`.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (clipped to -85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (clipped to -180.0 to 180.0)
/// * `level` - Detail level (1 to 23)
///
/// # Returns
///
/// A `Result` containing the pixel coordinates or an error if the detail
/// level is invalid.
#[inline]
pub fn lat_lon_to_pixel(lat: f64, lon: f64, level: u8) -> Result<PixelCoord, CoordError> {
    let size = map_size(level)? as f64;

    let lat = clip(lat, MIN_LAT, MAX_LAT);
    let lon = clip(lon, MIN_LON, MAX_LON);

    let x = (lon + 180.0) / 360.0;
    let sin_lat = (lat * PI / 180.0).sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

    // Scale to map size, truncate, and clip to the pixel range
    let px = clip(x * size + 0.5, 0.0, size - 1.0) as u32;
    let py = clip(y * size + 0.5, 0.0, size - 1.0) as u32;

    Ok(PixelCoord { x: px, y: py })
}

/// Converts global pixel coordinates to the tile containing them.
#[inline]
pub fn pixel_to_tile(pixel: PixelCoord) -> TileCoord {
    TileCoord {
        x: pixel.x / TILE_SIZE,
        y: pixel.y / TILE_SIZE,
    }
}

/// Converts geographic coordinates directly to tile coordinates.
///
/// Chains `lat_lon_to_pixel` and `pixel_to_tile`.
#[inline]
pub fn lat_lon_to_tile(lat: f64, lon: f64, level: u8) -> Result<TileCoord, CoordError> {
    Ok(pixel_to_tile(lat_lon_to_pixel(lat, lon, level)?))
}

/// Converts global pixel coordinates back to geographic coordinates.
///
/// Inverse of `lat_lon_to_pixel`; round-trips within floating-point
/// tolerance (one pixel of precision at the given detail level).
#[inline]
pub fn pixel_to_lat_lon(pixel: PixelCoord, level: u8) -> Result<(f64, f64), CoordError> {
    let size = map_size(level)? as f64;

    let x = clip(pixel.x as f64, 0.0, size - 1.0) / size - 0.5;
    let y = 0.5 - clip(pixel.y as f64, 0.0, size - 1.0) / size;

    let lat = 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI;
    let lon = 360.0 * x;

    Ok((lat, lon))
}

/// Returns the ground resolution in meters per pixel at the given
/// latitude and detail level.
#[inline]
pub fn ground_resolution(lat: f64, level: u8) -> Result<f64, CoordError> {
    let size = map_size(level)? as f64;
    let lat = clip(lat, MIN_LAT, MAX_LAT);
    Ok((lat * PI / 180.0).cos() * 2.0 * PI * EARTH_RADIUS / size)
}

/// Returns the map scale denominator at the given latitude, detail
/// level, and screen resolution (dots per inch).
///
/// A return value of 50000 means a scale of 1 : 50000.
#[inline]
pub fn map_scale(lat: f64, level: u8, screen_dpi: f64) -> Result<f64, CoordError> {
    Ok(ground_resolution(lat, level)? * screen_dpi / 0.0254)
}
