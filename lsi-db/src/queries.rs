//! Typed query methods for retrieving index observations.
//!
//! All queries return typed structs from [`crate::models`] (or plain
//! primitives) that can be serialized to JSON for the chart components.
//!
//! Column names for the per-index queries come from the static
//! [`lsi_core::index::IndexConfig`] table, never from user input, so
//! interpolating them into SQL is safe.

use crate::models::IndexObservation;
use crate::Database;
use lsi_core::index::IndexConfig;

impl Database {
    /// Get the observation series for one index, optionally filtered by year.
    ///
    /// An empty `years` slice means no filter: the full history. This is
    /// where the dashboard's "no years ticked means every year" policy is
    /// implemented. Rows come back ordered by date.
    pub fn query_index_series(
        &self,
        config: &IndexConfig,
        years: &[i32],
    ) -> anyhow::Result<Vec<IndexObservation>> {
        let conn = self.conn.borrow();
        let sql = if years.is_empty() {
            format!(
                "SELECT date, year, month, {mean}, {std}, pixel_count
                 FROM observations
                 ORDER BY date",
                mean = config.mean_column,
                std = config.std_column,
            )
        } else {
            let year_list = years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "SELECT date, year, month, {mean}, {std}, pixel_count
                 FROM observations
                 WHERE year IN ({year_list})
                 ORDER BY date",
                mean = config.mean_column,
                std = config.std_column,
            )
        };

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(IndexObservation {
                    date: row.get(0)?,
                    year: row.get(1)?,
                    month: row.get::<_, i64>(2)? as u32,
                    mean: row.get(3)?,
                    std: row.get(4)?,
                    pixel_count: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[LSI Debug] query: query_index_series({}) returned {} records",
            config.short_label,
            rows.len()
        );
        Ok(rows)
    }

    /// Get the distinct years present in the dataset, ascending.
    ///
    /// Drives the year multi-select in the sidebar; the set of selectable
    /// years is data-driven, never hard-coded.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM observations ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        log::info!("[LSI Debug] query: query_years returned {:?}", years);
        Ok(years)
    }

    /// Get the (min, max) acquisition date range across all observations.
    ///
    /// Errors when the dataset is empty.
    pub fn query_date_range(&self) -> anyhow::Result<(String, String)> {
        let conn = self.conn.borrow();
        let (min_date, max_date) =
            conn.query_row("SELECT MIN(date), MAX(date) FROM observations", [], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
        log::info!(
            "[LSI Debug] query: query_date_range returned ({}, {})",
            min_date,
            max_date
        );
        Ok((min_date, max_date))
    }

    /// Get the total number of loaded scene observations.
    pub fn query_observation_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count =
            conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use lsi_core::index::{IndexConfig, IndexKind};

    /// Helper to create a database spanning three years, loaded out of order
    /// to exercise query-side sorting.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2023-07-12,2023,7,0.598,0.104,0.061,0.037,-0.153,0.031,31.25,3.40,84050
2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
2024-03-14,2024,3,0.471,0.092,0.099,0.043,-0.125,0.036,17.80,2.31,83890
2022-07-20,2022,7,0.583,0.101,0.059,0.036,-0.148,0.032,30.10,3.22,84120
2023-01-08,2023,1,0.395,0.079,0.112,0.040,-0.108,0.039,11.87,1.92,84100
2024-07-09,2024,7,0.611,0.098,0.055,0.035,-0.157,0.030,32.05,3.51,84200
";
        db.load_observations(csv).unwrap();
        db
    }

    #[test]
    fn series_is_ordered_by_date() {
        let db = sample_db();
        let ndvi = IndexConfig::for_kind(IndexKind::Ndvi);
        let series = db.query_index_series(&ndvi, &[]).unwrap();

        assert_eq!(series.len(), 6);
        let dates: Vec<&str> = series.iter().map(|o| o.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "Series should come back in date order");
        assert_eq!(series[0].date, "2022-01-05");
        assert_eq!(series[5].date, "2024-07-09");
    }

    #[test]
    fn empty_year_filter_matches_full_year_list() {
        let db = sample_db();
        let lst = IndexConfig::for_kind(IndexKind::Lst);

        let unfiltered = db.query_index_series(&lst, &[]).unwrap();
        let all_years = db.query_years().unwrap();
        let filtered = db.query_index_series(&lst, &all_years).unwrap();

        assert_eq!(
            unfiltered, filtered,
            "Empty year filter should behave exactly like selecting every year"
        );
    }

    #[test]
    fn year_filter_restricts_rows() {
        let db = sample_db();
        let ndwi = IndexConfig::for_kind(IndexKind::Ndwi);

        let series = db.query_index_series(&ndwi, &[2023]).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|o| o.year == 2023));

        let series = db.query_index_series(&ndwi, &[2022, 2024]).unwrap();
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|o| o.year == 2022 || o.year == 2024));
    }

    #[test]
    fn year_filter_with_unknown_year_returns_empty() {
        let db = sample_db();
        let ndvi = IndexConfig::for_kind(IndexKind::Ndvi);
        let series = db.query_index_series(&ndvi, &[2031]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn each_config_selects_its_own_columns() {
        let db = sample_db();
        let ndvi = db
            .query_index_series(&IndexConfig::for_kind(IndexKind::Ndvi), &[2022])
            .unwrap();
        let lst = db
            .query_index_series(&IndexConfig::for_kind(IndexKind::Lst), &[2022])
            .unwrap();

        assert!((ndvi[0].mean - 0.412).abs() < 1e-9);
        assert!((lst[0].mean - 12.40).abs() < 1e-9);
        assert!((lst[0].std - 1.85).abs() < 1e-9);
        assert_eq!(ndvi[0].pixel_count, lst[0].pixel_count);
    }

    #[test]
    fn query_years_is_sorted_and_distinct() {
        let db = sample_db();
        assert_eq!(db.query_years().unwrap(), vec![2022, 2023, 2024]);
    }

    #[test]
    fn query_date_range_spans_the_dataset() {
        let db = sample_db();
        let (min, max) = db.query_date_range().unwrap();
        assert_eq!(min, "2022-01-05");
        assert_eq!(max, "2024-07-09");
    }

    #[test]
    fn query_date_range_errors_on_empty_dataset() {
        let db = Database::new().unwrap();
        assert!(db.query_date_range().is_err());
    }

    #[test]
    fn observation_count_matches_loaded_rows() {
        let db = sample_db();
        assert_eq!(db.query_observation_count().unwrap(), 6);
    }
}
