//! Quadkey codec
//!
//! Encodes tile coordinates into quadkey strings and back. A quadkey is
//! a base-4 string with one character per detail level, most significant
//! bit first, uniquely addressing one tile in the 2^level × 2^level grid.

use crate::coord::{CoordError, TileCoord, MAX_DETAIL, MIN_DETAIL};

/// Encodes tile coordinates into a quadkey at the given detail level.
///
/// Each character interleaves one bit of the x and y coordinates,
/// starting with the most significant bit: digit = 0, +1 if the x bit is
/// set, +2 if the y bit is set.
///
/// # Errors
///
/// Returns `CoordError::InvalidDetailLevel` if `level` is outside [1, 23].
pub fn tile_to_quadkey(tile: TileCoord, level: u8) -> Result<String, CoordError> {
    if !(MIN_DETAIL..=MAX_DETAIL).contains(&level) {
        return Err(CoordError::InvalidDetailLevel(level));
    }

    let mut quadkey = String::with_capacity(level as usize);
    for i in (1..=level).rev() {
        let mask = 1u32 << (i - 1);
        let mut digit = b'0';
        if tile.x & mask != 0 {
            digit += 1;
        }
        if tile.y & mask != 0 {
            digit += 2;
        }
        quadkey.push(digit as char);
    }

    Ok(quadkey)
}

/// Decodes a quadkey back into tile coordinates and its detail level.
///
/// # Errors
///
/// Returns `CoordError::InvalidQuadkey` if the string is empty, longer
/// than 23 characters, or contains characters other than '0'-'3'.
pub fn quadkey_to_tile(quadkey: &str) -> Result<(TileCoord, u8), CoordError> {
    let len = quadkey.len();
    if len < MIN_DETAIL as usize || len > MAX_DETAIL as usize {
        return Err(CoordError::InvalidQuadkey(quadkey.to_string()));
    }

    let level = len as u8;
    let mut x = 0u32;
    let mut y = 0u32;

    for (i, c) in quadkey.chars().enumerate() {
        let mask = 1u32 << (level as usize - i - 1);
        match c {
            '0' => {}
            '1' => x |= mask,
            '2' => y |= mask,
            '3' => {
                x |= mask;
                y |= mask;
            }
            _ => return Err(CoordError::InvalidQuadkey(quadkey.to_string())),
        }
    }

    Ok((TileCoord { x, y }, level))
}
