//! Landsat Surface Index Dashboard
//!
//! Interactive dashboard over per-scene Landsat statistics for one fixed
//! agricultural area of interest: NDVI, NDWI, NDBI, and land surface
//! temperature across the 2022-2024 archive. One tab per index; every tab
//! shows the AOI map, summary stat cards, the time series with optional
//! variability bars, a seasonal year-by-month heatmap, the raw scene
//! table, and a trend metric.
//!
//! Data flow:
//! 1. `build.rs` copies `all-landsat-data.csv` and `aoi.geojson` into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    AOI is parsed and normalized to WGS84. A broken AOI only degrades the
//!    map panel; a broken CSV is fatal.
//! 4. Whenever the tab or a sidebar control changes, `lsi_compose::composer`
//!    builds a `RenderPlan` and this shell hands each panel to its JS
//!    renderer through `lsi_chart_ui::js_bridge`.

use dioxus::prelude::*;
use lsi_chart_ui::components::{
    EmptyState, ErrorDisplay, IndexTabs, LoadingSpinner, MapStyleToggle, MetricCard, Panel,
    VariabilityToggle, YearSelector,
};
use lsi_chart_ui::js_bridge;
use lsi_chart_ui::state::AppState;
use lsi_compose::composer::{self, BoundaryState};
use lsi_compose::plan::{MapPanel, RenderPlan};
use lsi_core::index::IndexConfig;
use lsi_core::selection::SelectionState;
use lsi_db::Database;
use lsi_geo::boundary::Boundary;

/// Per-scene AOI statistics for all four indices.
const LANDSAT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/all-landsat-data.csv"));
/// AOI boundary polygon.
const AOI_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/aoi.geojson"));

/// Container DOM element IDs the JS renderers draw into.
const MAP_ID: &str = "aoi-map";
const LINE_CHART_ID: &str = "index-line-chart";
const HEATMAP_ID: &str = "seasonal-heatmap";
const TABLE_ID: &str = "index-data-table";
const TREND_ID: &str = "trend-metric";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("landsat-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    web_sys::console::log_1(&"[LSI Debug] dashboard App component mounted".into());

    let mut state = use_context_provider(AppState::new);

    // Load the embedded CSV and AOI once on mount
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_observations(LANDSAT_CSV) {
                    log::error!("Failed to load observations: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load scene statistics: {}", e)));
                    state.loading.set(false);
                    return;
                }

                match db.query_years() {
                    Ok(years) => {
                        web_sys::console::log_1(
                            &format!("[LSI Debug] dataset years: {:?}", years).into(),
                        );
                        // Default selection: every year checked.
                        state.selected_years.set(years.clone());
                        state.available_years.set(years);
                    }
                    Err(e) => {
                        log::error!("Failed to read year range: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Failed to read year range: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }

                // The AOI is not fatal: a bad boundary keeps the charts
                // alive and only blanks the map panel.
                match Boundary::from_geojson_str(AOI_GEOJSON) {
                    Ok(boundary) => {
                        web_sys::console::log_1(
                            &format!(
                                "[LSI Debug] AOI loaded: {} features, centroid {:?}",
                                boundary.feature_count(),
                                boundary.centroid()
                            )
                            .into(),
                        );
                        state.boundary.set(Some(BoundaryState::Loaded(boundary)));
                    }
                    Err(e) => {
                        log::warn!("AOI boundary unavailable: {}", e);
                        state
                            .boundary
                            .set(Some(BoundaryState::Failed(e.to_string())));
                    }
                }

                state.db.set(Some(db));
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Recompose and re-render whenever the tab or a sidebar control changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let boundary = match &*state.boundary.read() {
            Some(boundary) => boundary.clone(),
            None => return,
        };

        let config = IndexConfig::for_kind((state.selected_index)());
        let selection = SelectionState {
            years: (state.selected_years)(),
            map_style: (state.map_style)(),
            show_variability: (state.show_variability)(),
        };
        web_sys::console::log_1(
            &format!(
                "[LSI Debug] composing {} for years {:?}",
                config.short_label, selection.years
            )
            .into(),
        );

        js_bridge::init_charts();

        let plan = match composer::compose(&db, &boundary, &config, &selection) {
            Ok(plan) => plan,
            Err(e) => {
                log::error!("Compose failed: {}", e);
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };

        dispatch_panels(&plan);
        state.plan.set(Some(plan));
    });

    let error = (state.error_msg)();
    let loading = (state.loading)();
    let plan = (state.plan)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1400px; margin: 0 auto;",

            if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if loading {
                LoadingSpinner {}
            } else if let Some(plan) = plan {
                DashboardBody { plan }
            }
        }
    }
}

/// Serialize each panel of the plan and hand it to its JS renderer. Panels
/// absent from the plan get their containers cleared instead.
fn dispatch_panels(plan: &RenderPlan) {
    match &plan.map {
        MapPanel::Boundary(spec) => {
            let geojson = serde_json::to_string(&spec.aoi).unwrap_or_default();
            let config = serde_json::to_string(&serde_json::json!({
                "centerLat": spec.center_lat,
                "centerLon": spec.center_lon,
                "zoom": spec.zoom,
                "tileUrl": spec.tile_url,
                "tileAttribution": spec.tile_attribution,
                "outlineColor": spec.outline_color,
                "outlineWeight": spec.outline_weight,
                "outlineOpacity": spec.outline_opacity,
            }))
            .unwrap_or_default();
            js_bridge::render_aoi_map(MAP_ID, &geojson, &config);
        }
        MapPanel::Unavailable { message } => {
            log::warn!("Map panel unavailable: {}", message);
            js_bridge::destroy_aoi_map(MAP_ID);
        }
    }

    if let Some(chart) = &plan.line_chart {
        let data = serde_json::to_string(&chart.points).unwrap_or_default();
        let config = serde_json::to_string(&serde_json::json!({
            "color": chart.color,
            "showErrorBars": chart.show_error_bars,
            "meanValue": chart.mean_value,
            "meanLabel": chart.mean_label,
            "yAxisLabel": chart.axis_label,
            "decimals": chart.decimals,
            "unitSuffix": chart.unit_suffix,
        }))
        .unwrap_or_default();
        js_bridge::render_line_chart(LINE_CHART_ID, &data, &config);
    } else {
        js_bridge::destroy_chart(LINE_CHART_ID);
    }

    if let Some(heatmap) = &plan.heatmap {
        let data = serde_json::to_string(&heatmap.grid.rows).unwrap_or_default();
        let config = serde_json::to_string(&serde_json::json!({
            "monthLabels": heatmap.month_labels,
            "colorScale": heatmap.color_scale,
            "valueLabel": heatmap.value_label,
            "cellDecimals": heatmap.cell_decimals,
            "reverseYears": heatmap.reverse_years,
        }))
        .unwrap_or_default();
        js_bridge::render_seasonal_heatmap(HEATMAP_ID, &data, &config);
    } else {
        js_bridge::destroy_chart(HEATMAP_ID);
    }

    if let Some(table) = &plan.table {
        let data = serde_json::to_string(&table.rows).unwrap_or_default();
        let config = serde_json::to_string(&serde_json::json!({
            "columns": table.columns,
        }))
        .unwrap_or_default();
        js_bridge::render_data_table(TABLE_ID, &data, &config);
    } else {
        js_bridge::destroy_chart(TABLE_ID);
    }

    if let Some(trend) = &plan.trend {
        let data = serde_json::to_string(&trend.series).unwrap_or_default();
        let config = serde_json::to_string(&serde_json::json!({
            "label": trend.label,
            "latest": trend.latest,
            "delta": trend.delta,
            "decimals": trend.decimals,
            "unitSuffix": trend.unit_suffix,
            "color": trend.color,
        }))
        .unwrap_or_default();
        js_bridge::render_trend_metric(TREND_ID, &data, &config);
    } else {
        js_bridge::destroy_chart(TREND_ID);
    }
}

#[derive(Props, Clone, PartialEq)]
struct DashboardBodyProps {
    plan: RenderPlan,
}

/// The three-column dashboard body: map and stat cards on the left, the
/// chart stack in the middle, the trend widget on the right.
#[component]
fn DashboardBody(props: DashboardBodyProps) -> Element {
    let plan = props.plan;

    let map_note = match &plan.map {
        MapPanel::Unavailable { message } => Some(message.clone()),
        MapPanel::Boundary(_) => None,
    };
    let line_heading = plan
        .line_chart
        .as_ref()
        .map(|c| c.heading.clone())
        .unwrap_or_default();
    let heatmap_heading = plan
        .heatmap
        .as_ref()
        .map(|h| h.heading.clone())
        .unwrap_or_default();
    let table_heading = plan
        .table
        .as_ref()
        .map(|t| t.heading.clone())
        .unwrap_or_default();
    let has_table = plan.table.is_some();
    let has_trend = plan.trend.is_some();

    rsx! {
        h2 {
            style: "margin: 4px 0 12px 0; font-size: 22px;",
            "{plan.title}"
        }

        IndexTabs {}

        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start; padding: 8px 12px; margin-bottom: 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            YearSelector {}
            MapStyleToggle {}
            VariabilityToggle {}
        }

        div {
            style: "display: flex; gap: 16px; align-items: flex-start; flex-wrap: wrap;",

            // Left column: AOI map plus the two stat card stacks
            div {
                style: "flex: 3 1 280px; min-width: 260px;",
                if let Some(note) = map_note {
                    div {
                        style: "padding: 24px 12px; background: #FFF3E0; border: 1px solid #FFCC80; border-radius: 4px; color: #E65100; font-size: 13px;",
                        "Map unavailable: {note}"
                    }
                } else {
                    Panel {
                        id: MAP_ID.to_string(),
                        heading: "Area of Interest".to_string(),
                        min_height: 380,
                    }
                }
                div {
                    style: "display: flex; gap: 8px; margin-top: 12px;",
                    div {
                        style: "flex: 1;",
                        for card in plan.left_cards.clone() {
                            MetricCard { label: card.label, value: card.value }
                        }
                    }
                    div {
                        style: "flex: 1;",
                        for card in plan.right_cards.clone() {
                            MetricCard { label: card.label, value: card.value }
                        }
                    }
                }
            }

            // Middle column: time series over the seasonal heatmap
            div {
                style: "flex: 4 1 400px; min-width: 360px;",
                if let Some(message) = plan.empty_message.clone() {
                    EmptyState { message }
                } else {
                    Panel {
                        id: LINE_CHART_ID.to_string(),
                        heading: line_heading,
                        min_height: 360,
                    }
                    Panel {
                        id: HEATMAP_ID.to_string(),
                        heading: heatmap_heading,
                        min_height: 240,
                    }
                }
            }

            // Right column: raw table over the trend metric variants
            div {
                style: "flex: 2 1 200px; min-width: 200px;",
                if has_table {
                    Panel {
                        id: TABLE_ID.to_string(),
                        heading: table_heading,
                        min_height: 200,
                    }
                }
                if has_trend {
                    Panel {
                        id: TREND_ID.to_string(),
                        heading: "Trend".to_string(),
                        min_height: 240,
                    }
                }
            }
        }
    }
}
