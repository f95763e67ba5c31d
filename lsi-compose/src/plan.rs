//! The render plan: a pure-data description of one dashboard tab.
//!
//! The composer fills one of these per index and the shell serializes the
//! pieces it needs for the JS renderers. Nothing in here touches the DOM,
//! so every panel can be asserted on in plain unit tests.

use lsi_core::index::IndexConfig;
use serde::Serialize;

use crate::seasonal::SeasonalGrid;

/// Everything one dashboard tab needs to draw itself.
///
/// When `empty_message` is `Some`, the selection matched no scenes: the
/// chart panels are `None`, the stat cards read "N/A", and the shell
/// shows the message where the charts would be. The map panel is
/// independent of the year filter and is populated either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    /// Dashboard heading, icon plus full index name plus year label.
    pub title: String,
    pub empty_message: Option<String>,
    pub map: MapPanel,
    /// Left column of stat cards: mean, max, pixel count.
    pub left_cards: Vec<StatCard>,
    /// Right column of stat cards: min, std dev, timeline.
    pub right_cards: Vec<StatCard>,
    pub line_chart: Option<LineChartSpec>,
    pub heatmap: Option<HeatmapSpec>,
    pub table: Option<TableSpec>,
    pub trend: Option<TrendSpec>,
}

impl RenderPlan {
    /// Build the explicit empty dashboard for a selection with no scenes.
    pub fn empty_state(
        title: String,
        map: MapPanel,
        left_cards: Vec<StatCard>,
        right_cards: Vec<StatCard>,
        message: String,
    ) -> RenderPlan {
        RenderPlan {
            title,
            empty_message: Some(message),
            map,
            left_cards,
            right_cards,
            line_chart: None,
            heatmap: None,
            table: None,
            trend: None,
        }
    }
}

/// The AOI map panel. Boundary problems are confined here: a failed AOI
/// load downgrades the panel to `Unavailable` while the statistics and
/// charts keep rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapPanel {
    Boundary(MapSpec),
    Unavailable { message: String },
}

/// Inputs for the Leaflet AOI panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    /// AOI boundary as a WGS84 FeatureCollection.
    pub aoi: geojson::FeatureCollection,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u32,
    pub tile_url: String,
    pub tile_attribution: String,
    pub outline_color: String,
    pub outline_weight: u32,
    pub outline_opacity: f64,
}

/// One stat card: a label and a preformatted display value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

/// Inputs for the time-series line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartSpec {
    pub heading: String,
    /// Scene points in date order.
    pub points: Vec<LinePoint>,
    pub color: String,
    /// Draw one-std error bars around each point.
    pub show_error_bars: bool,
    pub mean_value: f64,
    /// Annotation next to the dashed mean line, e.g. "Mean NDVI = 0.412".
    pub mean_label: String,
    pub axis_label: String,
    pub decimals: usize,
    pub unit_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub date: String,
    pub value: f64,
    pub std: f64,
}

/// Inputs for the seasonal year-by-month heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSpec {
    pub heading: String,
    pub grid: SeasonalGrid,
    pub month_labels: [&'static str; 12],
    pub color_scale: String,
    pub value_label: String,
    /// Cell labels use two decimals for every index.
    pub cell_decimals: usize,
    /// Latest year on top.
    pub reverse_years: bool,
}

/// Inputs for the raw observation table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSpec {
    pub heading: String,
    /// Column headers: date plus the index's mean and std column names.
    pub columns: [String; 3],
    /// Rows with display-precision values, most recent scene first.
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub mean: String,
    pub std: String,
}

/// Inputs for the trend metric widget, drawn in line and area variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSpec {
    pub label: String,
    pub latest: f64,
    /// Last minus second-to-last scene mean; `None` below two scenes and
    /// shown as "N/A".
    pub delta: Option<f64>,
    /// Full mean series in date order for the sparkline.
    pub series: Vec<f64>,
    pub decimals: usize,
    pub unit_suffix: String,
    pub color: String,
}

/// Format a value for a stat card at the index's display precision, with
/// a space before the unit ("23.45 °C"). Ratio indices have no unit.
pub fn format_card_value(value: f64, config: &IndexConfig) -> String {
    if config.unit_suffix.is_empty() {
        format!("{:.*}", config.decimals, value)
    } else {
        format!("{:.*} {}", config.decimals, value, config.unit_suffix)
    }
}

/// Format a value for chart annotations, unit attached without a space
/// ("23.45°C").
pub fn format_chart_value(value: f64, config: &IndexConfig) -> String {
    format!("{:.*}{}", config.decimals, value, config.unit_suffix)
}

/// Format a pixel count with thousands separators: 84213 -> "84,213".
pub fn format_pixel_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if count < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsi_core::index::{IndexConfig, IndexKind};

    #[test]
    fn test_ratio_card_value_has_three_decimals_and_no_unit() {
        let config = IndexConfig::for_kind(IndexKind::Ndvi);
        assert_eq!(format_card_value(0.41237, &config), "0.412");
    }

    #[test]
    fn test_lst_card_value_has_two_decimals_and_spaced_unit() {
        let config = IndexConfig::for_kind(IndexKind::Lst);
        assert_eq!(format_card_value(23.448, &config), "23.45 \u{00B0}C");
    }

    #[test]
    fn test_chart_value_attaches_unit_without_space() {
        let lst = IndexConfig::for_kind(IndexKind::Lst);
        assert_eq!(format_chart_value(23.448, &lst), "23.45\u{00B0}C");

        let ndwi = IndexConfig::for_kind(IndexKind::Ndwi);
        assert_eq!(format_chart_value(-0.1236, &ndwi), "-0.124");
    }

    #[test]
    fn test_pixel_count_grouping() {
        assert_eq!(format_pixel_count(0), "0");
        assert_eq!(format_pixel_count(999), "999");
        assert_eq!(format_pixel_count(1_000), "1,000");
        assert_eq!(format_pixel_count(84_213), "84,213");
        assert_eq!(format_pixel_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_empty_state_carries_message_and_no_chart_panels() {
        let plan = RenderPlan::empty_state(
            "title".to_string(),
            MapPanel::Unavailable {
                message: "no boundary".to_string(),
            },
            vec![StatCard {
                label: "Mean NDVI".to_string(),
                value: "N/A".to_string(),
            }],
            vec![],
            "No scenes for the selected years".to_string(),
        );

        assert!(plan.empty_message.is_some());
        assert!(plan.line_chart.is_none());
        assert!(plan.heatmap.is_none());
        assert!(plan.table.is_none());
        assert!(plan.trend.is_none());
        assert_eq!(plan.left_cards[0].value, "N/A");
    }

    #[test]
    fn test_map_panel_serializes_with_state_tag() {
        let panel = MapPanel::Unavailable {
            message: "unsupported projection".to_string(),
        };
        let json = serde_json::to_string(&panel).unwrap();
        assert!(json.contains("\"state\":\"unavailable\""));
        assert!(json.contains("unsupported projection"));
    }
}
