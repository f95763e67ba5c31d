use serde::{Deserialize, Serialize};

/// Base layer shown under the AOI outline.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MapStyle {
    Standard,
    Satellite,
}

/// One dashboard render request, rebuilt from the sidebar controls every time
/// a control changes. Never persisted.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SelectionState {
    /// Years to include. Empty means no filter: every year in the dataset.
    pub years: Vec<i32>,
    pub map_style: MapStyle,
    /// Draw per-scene standard deviation as error bars on the time series.
    pub show_variability: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState {
            years: Vec::new(),
            map_style: MapStyle::Standard,
            show_variability: true,
        }
    }
}
