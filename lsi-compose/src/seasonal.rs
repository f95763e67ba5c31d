use lsi_db::models::IndexObservation;
use serde::Serialize;
use std::collections::BTreeMap;

/// Column labels for the seasonal heatmap, January through December.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One year of the seasonal grid. Every row carries all twelve months;
/// a month with no scenes stays `None` and serializes as JSON `null`.
/// Zero is a legitimate index value and must stay distinguishable from
/// a missing month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalRow {
    pub year: i32,
    pub values: [Option<f64>; 12],
}

/// Year-by-month pivot of scene means.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonalGrid {
    /// One row per year present in the input, ascending.
    pub rows: Vec<SeasonalRow>,
}

/// Pivot a series into a year-by-month grid, averaging scene means that
/// fall in the same cell.
pub fn seasonal_pivot(series: &[IndexObservation]) -> SeasonalGrid {
    let mut cells: BTreeMap<i32, [(f64, u32); 12]> = BTreeMap::new();

    for obs in series {
        // Months are 1-12 out of the loader; skip anything else rather
        // than index out of bounds.
        let slot = match (obs.month as usize).checked_sub(1) {
            Some(index) if index < 12 => index,
            _ => continue,
        };
        let months = cells.entry(obs.year).or_insert([(0.0, 0); 12]);
        months[slot].0 += obs.mean;
        months[slot].1 += 1;
    }

    let rows = cells
        .into_iter()
        .map(|(year, months)| SeasonalRow {
            year,
            values: months.map(|(sum, count)| {
                if count > 0 {
                    Some(sum / f64::from(count))
                } else {
                    None
                }
            }),
        })
        .collect();

    SeasonalGrid { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, month: u32, mean: f64) -> IndexObservation {
        IndexObservation {
            date: format!("{}-{:02}-15", year, month),
            year,
            month,
            mean,
            std: 0.05,
            pixel_count: 84_000,
        }
    }

    #[test]
    fn test_every_row_carries_twelve_cells() {
        let grid = seasonal_pivot(&[obs(2022, 6, 0.4), obs(2023, 1, 0.2)]);
        assert_eq!(grid.rows.len(), 2);
        for row in &grid.rows {
            assert_eq!(row.values.len(), 12);
        }
    }

    #[test]
    fn test_missing_months_are_none_not_zero() {
        let grid = seasonal_pivot(&[obs(2022, 6, 0.0)]);
        let row = &grid.rows[0];

        // June observed a genuine zero; every other month is absent.
        assert_eq!(row.values[5], Some(0.0));
        for (index, value) in row.values.iter().enumerate() {
            if index != 5 {
                assert_eq!(*value, None);
            }
        }
    }

    #[test]
    fn test_scenes_in_the_same_cell_are_averaged() {
        let grid = seasonal_pivot(&[obs(2022, 7, 0.4), obs(2022, 7, 0.6)]);
        let cell = grid.rows[0].values[6].unwrap();
        assert!((cell - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_years_ascend() {
        let grid = seasonal_pivot(&[obs(2024, 3, 0.3), obs(2022, 3, 0.1), obs(2023, 3, 0.2)]);
        let years: Vec<i32> = grid.rows.iter().map(|row| row.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024]);
    }

    #[test]
    fn test_empty_series_gives_empty_grid() {
        let grid = seasonal_pivot(&[]);
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn test_absent_cells_serialize_as_null() {
        let grid = seasonal_pivot(&[obs(2022, 1, 0.25)]);
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("\"year\":2022"));
        assert!(json.contains("null"));
        assert!(json.contains("0.25"));
    }
}
