use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four Landsat-derived surface indices the dashboard can display.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    Ndvi,
    Ndwi,
    Ndbi,
    Lst,
}

impl IndexKind {
    /// All indices in tab order.
    pub fn all() -> [IndexKind; 4] {
        [
            IndexKind::Ndvi,
            IndexKind::Ndwi,
            IndexKind::Ndbi,
            IndexKind::Lst,
        ]
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(IndexConfig::for_kind(*self).short_label)
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ndvi" => Ok(IndexKind::Ndvi),
            "ndwi" => Ok(IndexKind::Ndwi),
            "ndbi" => Ok(IndexKind::Ndbi),
            "lst" => Ok(IndexKind::Lst),
            other => Err(format!(
                "unknown index '{}' (expected ndvi, ndwi, ndbi, or lst)",
                other
            )),
        }
    }
}

/// Static storage and presentation metadata for one surface index.
///
/// Everything that differs between the four dashboard tabs lives here, so the
/// composition pipeline itself is index-agnostic.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct IndexConfig {
    pub kind: IndexKind,
    /// Short name used in card titles and annotations, e.g. "NDVI".
    pub short_label: &'static str,
    /// Spelled-out name shown in the dashboard heading.
    pub display_title: &'static str,
    /// Emoji shown next to the heading and in the tab strip.
    pub icon: &'static str,
    /// Column holding the per-scene AOI mean in the observations table.
    pub mean_column: &'static str,
    /// Column holding the per-scene AOI standard deviation.
    pub std_column: &'static str,
    /// Line and marker color for the time series chart.
    pub line_color: &'static str,
    /// Continuous color scale name for the seasonal heatmap.
    pub heatmap_scale: &'static str,
    /// Heading above the time series panel.
    pub series_heading: &'static str,
    /// Y axis label for the time series chart.
    pub axis_label: &'static str,
    /// Color bar label for the seasonal heatmap.
    pub heatmap_value_label: &'static str,
    /// Decimal places for displayed values.
    pub decimals: usize,
    /// Unit appended to displayed values; empty for dimensionless ratios.
    pub unit_suffix: &'static str,
}

impl IndexConfig {
    /// Look up the fixed configuration for an index.
    pub const fn for_kind(kind: IndexKind) -> IndexConfig {
        match kind {
            IndexKind::Ndvi => IndexConfig {
                kind: IndexKind::Ndvi,
                short_label: "NDVI",
                display_title: "Normalized Difference Vegetation Index",
                icon: "\u{1F33F}",
                mean_column: "NDVI_mean",
                std_column: "NDVI_std",
                line_color: "#2E7D32",
                heatmap_scale: "YlGn",
                series_heading: "NDVI Mean Over Time",
                axis_label: "NDVI",
                heatmap_value_label: "NDVI Mean",
                decimals: 3,
                unit_suffix: "",
            },
            IndexKind::Ndwi => IndexConfig {
                kind: IndexKind::Ndwi,
                short_label: "NDWI",
                display_title: "Normalized Difference Water Index",
                icon: "\u{1F4A7}",
                mean_column: "NDWI_mean",
                std_column: "NDWI_std",
                line_color: "#1E88E5",
                heatmap_scale: "Blues",
                series_heading: "NDWI Mean Over Time",
                axis_label: "NDWI",
                heatmap_value_label: "NDWI Mean",
                decimals: 3,
                unit_suffix: "",
            },
            IndexKind::Ndbi => IndexConfig {
                kind: IndexKind::Ndbi,
                short_label: "NDBI",
                display_title: "Normalized Difference Built-up Index",
                icon: "\u{1F3D9}\u{FE0F}",
                mean_column: "NDBI_mean",
                std_column: "NDBI_std",
                line_color: "#FB8C00",
                heatmap_scale: "Oranges",
                series_heading: "NDBI Mean Over Time",
                axis_label: "NDBI",
                heatmap_value_label: "NDBI Mean",
                decimals: 3,
                unit_suffix: "",
            },
            IndexKind::Lst => IndexConfig {
                kind: IndexKind::Lst,
                short_label: "LST",
                display_title: "Land Surface Temperature",
                icon: "\u{1F321}\u{FE0F}",
                mean_column: "LST_mean_C",
                std_column: "LST_std_C",
                line_color: "#D32F2F",
                heatmap_scale: "RdYlBu_r",
                series_heading: "LST Over Time",
                axis_label: "LST (\u{00B0}C)",
                heatmap_value_label: "LST (\u{00B0}C)",
                decimals: 2,
                unit_suffix: "\u{00B0}C",
            },
        }
    }

    /// All four configurations in tab order.
    pub fn all() -> [IndexConfig; 4] {
        IndexKind::all().map(IndexConfig::for_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lookup_matches_kind() {
        for kind in IndexKind::all() {
            let config = IndexConfig::for_kind(kind);
            assert_eq!(config.kind, kind, "config for {:?} has wrong kind", kind);
        }
    }

    #[test]
    fn ratio_indices_use_three_decimals_lst_uses_two() {
        assert_eq!(IndexConfig::for_kind(IndexKind::Ndvi).decimals, 3);
        assert_eq!(IndexConfig::for_kind(IndexKind::Ndwi).decimals, 3);
        assert_eq!(IndexConfig::for_kind(IndexKind::Ndbi).decimals, 3);
        assert_eq!(IndexConfig::for_kind(IndexKind::Lst).decimals, 2);
    }

    #[test]
    fn only_lst_carries_a_unit() {
        for config in IndexConfig::all() {
            if config.kind == IndexKind::Lst {
                assert_eq!(config.unit_suffix, "\u{00B0}C");
            } else {
                assert_eq!(config.unit_suffix, "");
            }
        }
    }

    #[test]
    fn kind_parses_from_lowercase_and_uppercase() {
        assert_eq!("ndvi".parse::<IndexKind>().unwrap(), IndexKind::Ndvi);
        assert_eq!("NDWI".parse::<IndexKind>().unwrap(), IndexKind::Ndwi);
        assert_eq!("Ndbi".parse::<IndexKind>().unwrap(), IndexKind::Ndbi);
        assert_eq!("lst".parse::<IndexKind>().unwrap(), IndexKind::Lst);
        assert!("evi".parse::<IndexKind>().is_err());
    }

    #[test]
    fn mean_and_std_columns_pair_up() {
        for config in IndexConfig::all() {
            assert!(
                config.std_column.contains("std") || config.std_column.contains("_std"),
                "std column {} should be a std column",
                config.std_column
            );
            assert_ne!(config.mean_column, config.std_column);
        }
    }
}
