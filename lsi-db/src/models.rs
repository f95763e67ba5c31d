//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to the JS renderers
//! as JSON from the Dioxus WASM frontend.

use serde::Serialize;

/// One Landsat scene's zonal statistics for a single index.
///
/// The `mean` and `std` are computed over the valid pixels of the AOI for
/// the scene; which index they describe depends on the
/// [`lsi_core::index::IndexConfig`] the query was made with.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexObservation {
    /// Acquisition date in ISO `YYYY-MM-DD` format.
    pub date: String,
    /// Calendar year of the acquisition.
    pub year: i32,
    /// Calendar month of the acquisition (1-12).
    pub month: u32,
    /// AOI mean of the index for this scene.
    pub mean: f64,
    /// AOI standard deviation of the index for this scene.
    pub std: f64,
    /// Number of valid (unmasked) pixels in the AOI for this scene.
    pub pixel_count: i64,
}
