//! AOI boundary handling for the Landsat index dashboard.
//!
//! This crate provides:
//! - `boundary`: loading the AOI GeoJSON, normalizing it to WGS84, and
//!   computing the map centroid
//! - `crs`: legacy GeoJSON `crs` member detection and the supported
//!   EPSG-to-proj-string table
//!
//! Reprojection uses `proj4rs`, a pure Rust proj port, so the same code
//! runs natively and under `wasm32-unknown-unknown`.

pub mod boundary;
pub mod crs;
