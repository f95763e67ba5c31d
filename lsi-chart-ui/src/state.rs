//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use lsi_compose::composer::BoundaryState;
use lsi_compose::plan::RenderPlan;
use lsi_core::index::IndexKind;
use lsi_core::selection::MapStyle;
use lsi_db::Database;

/// Shared application state for the dashboard shell and its controls.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the embedded CSV is loaded)
    pub db: Signal<Option<Database>>,
    /// AOI boundary load outcome (None while the load is still running)
    pub boundary: Signal<Option<BoundaryState>>,
    /// Years present in the dataset, ascending, for the year checkboxes
    pub available_years: Signal<Vec<i32>>,
    /// Index shown by the active tab
    pub selected_index: Signal<IndexKind>,
    /// Checked years; empty means no filter
    pub selected_years: Signal<Vec<i32>>,
    /// Base layer under the AOI outline
    pub map_style: Signal<MapStyle>,
    /// Draw std-dev error bars on the time series
    pub show_variability: Signal<bool>,
    /// Plan composed for the current selection; the RSX side reads the
    /// title, cards, and panel availability from here
    pub plan: Signal<Option<RenderPlan>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal error message if the data load failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            boundary: Signal::new(None),
            available_years: Signal::new(Vec::new()),
            selected_index: Signal::new(IndexKind::Ndvi),
            selected_years: Signal::new(Vec::new()),
            map_style: Signal::new(MapStyle::Standard),
            show_variability: Signal::new(true),
            plan: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
