//! MapStitch - Aerial imagery mosaics from quadkey tile servers
//!
//! This library converts a geographic bounding box into a rectangular
//! mosaic image assembled from 256×256 map tiles fetched from a
//! quadkey-addressed tile server (Bing Maps aerial imagery).
//!
//! The pipeline is: corner coordinates → spherical Mercator projection →
//! tile grid plan → quadkey encoding → concurrent fetch → decode →
//! mosaic assembly.

pub mod coord;
pub mod grid;
pub mod mosaic;
pub mod orchestrator;
pub mod provider;
pub mod quadkey;
