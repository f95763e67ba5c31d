//! Assembles one [`RenderPlan`] per dashboard tab from the database, the
//! AOI boundary, and the sidebar selection.

use lsi_core::error::DashboardError;
use lsi_core::index::IndexConfig;
use lsi_core::selection::{MapStyle, SelectionState};
use lsi_db::Database;
use lsi_geo::boundary::Boundary;

use crate::plan::{
    format_card_value, format_chart_value, format_pixel_count, HeatmapSpec, LineChartSpec,
    LinePoint, MapPanel, MapSpec, RenderPlan, StatCard, TableRow, TableSpec, TrendSpec,
};
use crate::seasonal;
use crate::summary::{self, IndexSummary};

const AOI_ZOOM: u32 = 8;
const AOI_OUTLINE_COLOR: &str = "#4CAF50";
const AOI_OUTLINE_WEIGHT: u32 = 3;
const AOI_OUTLINE_OPACITY: f64 = 0.7;

const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "\u{00A9} OpenStreetMap contributors";
const SATELLITE_TILE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const SATELLITE_ATTRIBUTION: &str = "Tiles \u{00A9} Esri & Maxar";

/// Outcome of the one-time AOI load, kept by the shell for every
/// subsequent render. A failed load only degrades the map panel; the
/// statistics and charts never depend on it.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryState {
    Loaded(Boundary),
    Failed(String),
}

/// Build the complete render plan for one index tab.
///
/// A selection that matches no scenes produces the explicit empty-state
/// plan rather than an error; only failed queries are fatal here.
pub fn compose(
    db: &Database,
    boundary: &BoundaryState,
    config: &IndexConfig,
    selection: &SelectionState,
) -> Result<RenderPlan, DashboardError> {
    let series = db
        .query_index_series(config, &selection.years)
        .map_err(|e| DashboardError::DataUnavailable(format!("index query failed: {}", e)))?;
    let known_years = db
        .query_years()
        .map_err(|e| DashboardError::DataUnavailable(format!("year query failed: {}", e)))?;

    let title = format!(
        "{} {} ({})",
        config.icon,
        config.display_title,
        years_label(&selection.years, &known_years)
    );
    let map = map_panel(boundary, selection.map_style);

    if series.is_empty() {
        log::info!(
            "[LSI Debug] compose: no {} scenes for years {:?}, building empty state",
            config.short_label,
            selection.years
        );
        let (left_cards, right_cards) = build_cards(config, None);
        return Ok(RenderPlan::empty_state(
            title,
            map,
            left_cards,
            right_cards,
            format!("No {} scenes match the selected years.", config.short_label),
        ));
    }

    let summary = summary::summarize(&series)?;
    let grid = seasonal::seasonal_pivot(&series);
    let (left_cards, right_cards) = build_cards(config, Some(&summary));

    let line_chart = LineChartSpec {
        heading: config.series_heading.to_string(),
        points: series
            .iter()
            .map(|obs| LinePoint {
                date: obs.date.clone(),
                value: obs.mean,
                std: obs.std,
            })
            .collect(),
        color: config.line_color.to_string(),
        show_error_bars: selection.show_variability,
        mean_value: summary.mean,
        mean_label: format!(
            "Mean {} = {}",
            config.short_label,
            format_chart_value(summary.mean, config)
        ),
        axis_label: config.axis_label.to_string(),
        decimals: config.decimals,
        unit_suffix: config.unit_suffix.to_string(),
    };

    let heatmap = HeatmapSpec {
        heading: format!("{} Seasonal Heatmap", config.short_label),
        grid,
        month_labels: seasonal::MONTH_LABELS,
        color_scale: config.heatmap_scale.to_string(),
        value_label: config.heatmap_value_label.to_string(),
        cell_decimals: 2,
        reverse_years: true,
    };

    let table = TableSpec {
        heading: format!("{} Data", config.short_label),
        columns: [
            "date".to_string(),
            config.mean_column.to_string(),
            config.std_column.to_string(),
        ],
        rows: series
            .iter()
            .rev()
            .map(|obs| TableRow {
                date: obs.date.clone(),
                mean: format!("{:.*}", config.decimals, obs.mean),
                std: format!("{:.*}", config.decimals, obs.std),
            })
            .collect(),
    };

    let trend = TrendSpec {
        label: format!("{} Trend", config.short_label),
        latest: summary.current_value,
        delta: summary.delta_from_previous,
        series: series.iter().map(|obs| obs.mean).collect(),
        decimals: config.decimals,
        unit_suffix: config.unit_suffix.to_string(),
        color: config.line_color.to_string(),
    };

    log::info!(
        "[LSI Debug] compose: built {} plan with {} scenes across {} years",
        config.short_label,
        series.len(),
        heatmap.grid.rows.len()
    );

    Ok(RenderPlan {
        title,
        empty_message: None,
        map,
        left_cards,
        right_cards,
        line_chart: Some(line_chart),
        heatmap: Some(heatmap),
        table: Some(table),
        trend: Some(trend),
    })
}

/// Year label for the dashboard title.
///
/// An empty selection, or one covering every known year, reads as the
/// full dataset range ("2022 - 2024"), derived from the data rather than
/// hard-coded. A narrower selection lists its distinct years ascending.
fn years_label(selected: &[i32], known_years: &[i32]) -> String {
    let mut distinct = selected.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let full_range = distinct.is_empty() || distinct == known_years;
    if full_range {
        return match (known_years.first(), known_years.last()) {
            (Some(min), Some(max)) if min != max => format!("{} - {}", min, max),
            (Some(only), _) => only.to_string(),
            _ => "no data".to_string(),
        };
    }

    distinct
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(" - ")
}

fn map_panel(boundary: &BoundaryState, style: MapStyle) -> MapPanel {
    match boundary {
        BoundaryState::Loaded(boundary) => {
            let (tile_url, tile_attribution) = match style {
                MapStyle::Standard => (OSM_TILE_URL, OSM_ATTRIBUTION),
                MapStyle::Satellite => (SATELLITE_TILE_URL, SATELLITE_ATTRIBUTION),
            };
            let (center_lat, center_lon) = boundary.centroid();
            MapPanel::Boundary(MapSpec {
                aoi: boundary.collection().clone(),
                center_lat,
                center_lon,
                zoom: AOI_ZOOM,
                tile_url: tile_url.to_string(),
                tile_attribution: tile_attribution.to_string(),
                outline_color: AOI_OUTLINE_COLOR.to_string(),
                outline_weight: AOI_OUTLINE_WEIGHT,
                outline_opacity: AOI_OUTLINE_OPACITY,
            })
        }
        BoundaryState::Failed(message) => MapPanel::Unavailable {
            message: message.clone(),
        },
    }
}

/// The six stat cards in their two columns. `None` for the summary means
/// the empty state: every value reads "N/A".
fn build_cards(
    config: &IndexConfig,
    summary: Option<&IndexSummary>,
) -> (Vec<StatCard>, Vec<StatCard>) {
    let card = |label: String, value: Option<String>| StatCard {
        label,
        value: value.unwrap_or_else(|| "N/A".to_string()),
    };

    let left = vec![
        card(
            format!("Mean {}", config.short_label),
            summary.map(|s| format_card_value(s.mean, config)),
        ),
        card(
            format!("Max {}", config.short_label),
            summary.map(|s| format_card_value(s.max, config)),
        ),
        card(
            "Pixel Count".to_string(),
            summary.map(|s| format_pixel_count(s.pixel_count_latest)),
        ),
    ];
    let right = vec![
        card(
            format!("Min {}", config.short_label),
            summary.map(|s| format_card_value(s.min, config)),
        ),
        card(
            format!("{} Std Dev", config.short_label),
            summary
                .and_then(|s| s.std_dev)
                .map(|std| format_card_value(std, config)),
        ),
        card(
            "Timeline".to_string(),
            summary.map(|s| {
                format!(
                    "{} \u{2192} {}",
                    year_prefix(&s.first_date),
                    year_prefix(&s.last_date)
                )
            }),
        ),
    ];
    (left, right)
}

fn year_prefix(date: &str) -> &str {
    date.get(..4).unwrap_or(date)
}
