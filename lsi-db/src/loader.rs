//! CSV loading for the observations table.
//!
//! The export pipeline produces one wide CSV with a header row and one row
//! per Landsat scene. Columns are resolved by header name, not position, so
//! extra columns (common in zonal statistics exports) are ignored and column
//! order does not matter.

use crate::Database;
use chrono::{Datelike, NaiveDate};
use lsi_core::error::DashboardError;
use rusqlite::params;
use std::path::Path;

/// Value columns that must be present in the observations CSV.
const VALUE_COLUMNS: [&str; 9] = [
    "NDVI_mean",
    "NDVI_std",
    "NDWI_mean",
    "NDWI_std",
    "NDBI_mean",
    "NDBI_std",
    "LST_mean_C",
    "LST_std_C",
    "count",
];

impl Database {
    /// Load scene observations from a CSV string.
    ///
    /// Required columns: `date` plus the eight index statistics columns and
    /// the valid pixel `count`. The stored `year` and `month` are derived
    /// from the parsed date, so the CSV may omit (or disagree with) any
    /// year or month columns of its own.
    ///
    /// A missing required column or an unparsable date fails the whole load
    /// with [`DashboardError::DataUnavailable`]. Rows with unparsable
    /// numeric values are skipped and counted.
    ///
    /// # Example CSV
    /// ```text
    /// date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
    /// 2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
    /// ```
    pub fn load_observations(&self, csv_data: &str) -> Result<(), DashboardError> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr
            .headers()
            .map_err(|e| {
                DashboardError::DataUnavailable(format!(
                    "observations CSV has no readable header row: {}",
                    e
                ))
            })?
            .clone();
        let column = |name: &str| headers.iter().position(|h| h.trim() == name);

        let date_idx = column("date").ok_or_else(|| {
            DashboardError::DataUnavailable(
                "observations CSV is missing the 'date' column".to_string(),
            )
        })?;
        let mut value_idx = [0usize; VALUE_COLUMNS.len()];
        for (slot, name) in value_idx.iter_mut().zip(VALUE_COLUMNS) {
            *slot = column(name).ok_or_else(|| {
                DashboardError::DataUnavailable(format!(
                    "observations CSV is missing the '{}' column",
                    name
                ))
            })?;
        }

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result.map_err(|e| {
                DashboardError::DataUnavailable(format!("observations CSV is malformed: {}", e))
            })?;

            let date = parse_scene_date(r.get(date_idx).unwrap_or("").trim())?;

            // Eight index statistics, then the pixel count.
            let mut values = [0f64; 8];
            let mut parse_ok = true;
            for (value, idx) in values.iter_mut().zip(&value_idx[..8]) {
                match r.get(*idx).unwrap_or("").trim().parse::<f64>() {
                    Ok(v) => *value = v,
                    Err(_) => {
                        parse_ok = false;
                        break;
                    }
                }
            }
            // Pixel counts come out of some exports as floats ("84213.0").
            let pixel_count = match r.get(value_idx[8]).unwrap_or("").trim().parse::<f64>() {
                Ok(c) => c as i64,
                Err(_) => {
                    parse_ok = false;
                    0
                }
            };
            if !parse_ok {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO observations
                 (date, year, month, NDVI_mean, NDVI_std, NDWI_mean, NDWI_std,
                  NDBI_mean, NDBI_std, LST_mean_C, LST_std_C, pixel_count)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    date.format("%Y-%m-%d").to_string(),
                    date.year(),
                    date.month(),
                    values[0],
                    values[1],
                    values[2],
                    values[3],
                    values[4],
                    values[5],
                    values[6],
                    values[7],
                    pixel_count,
                ],
            )
            .map_err(|e| {
                DashboardError::DataUnavailable(format!("failed to insert observation: {}", e))
            })?;
            count += 1;
        }
        log::info!(
            "[LSI Debug] loader: Loaded {} observations, skipped {} with invalid values",
            count,
            skipped
        );
        Ok(())
    }

    /// Load scene observations from a CSV file on disk (native CLI path).
    pub fn load_observations_file(&self, path: &Path) -> Result<(), DashboardError> {
        let csv_data = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::DataUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.load_observations(&csv_data)
    }
}

/// Parse a scene acquisition date.
///
/// Accepts plain ISO dates (`2022-01-05`) and datetime strings with a time
/// component (`2022-01-05T10:23:11`, `2022-01-05 10:23:11`); only the date
/// part is kept.
fn parse_scene_date(s: &str) -> Result<NaiveDate, DashboardError> {
    if s.is_empty() {
        return Err(DashboardError::DataUnavailable(
            "observations CSV contains a row with an empty date".to_string(),
        ));
    }
    let date_part = s.split(|c| c == ' ' || c == 'T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| {
        DashboardError::DataUnavailable(format!(
            "observations CSV contains an unparsable date '{}'",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use lsi_core::error::DashboardError;

    const SAMPLE_CSV: &str = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
2022-02-06,2022,2,0.438,0.091,0.097,0.044,-0.121,0.035,14.02,2.10,83950
2023-01-08,2023,1,0.395,0.079,0.112,0.040,-0.108,0.039,11.87,1.92,84100
";

    #[test]
    fn load_observations_from_csv() {
        let db = Database::new().unwrap();
        db.load_observations(SAMPLE_CSV).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let ndvi: f64 = conn
            .query_row(
                "SELECT NDVI_mean FROM observations WHERE date = '2022-01-05'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((ndvi - 0.412).abs() < 1e-9);

        let pixels: i64 = conn
            .query_row(
                "SELECT pixel_count FROM observations WHERE date = '2022-02-06'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(pixels, 83950);
    }

    #[test]
    fn load_ignores_extra_columns_and_column_order() {
        let db = Database::new().unwrap();
        // GEE-style export with system columns and shuffled order.
        let csv = "\
system:index,count,LST_std_C,LST_mean_C,NDBI_std,NDBI_mean,NDWI_std,NDWI_mean,NDVI_std,NDVI_mean,date,.geo
0_0,84213,1.85,12.40,0.038,-0.112,0.041,0.108,0.085,0.412,2022-01-05,{}
";
        db.load_observations(csv).unwrap();

        let conn = db.conn.borrow();
        let (ndvi, lst): (f64, f64) = conn
            .query_row(
                "SELECT NDVI_mean, LST_mean_C FROM observations WHERE date = '2022-01-05'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!((ndvi - 0.412).abs() < 1e-9);
        assert!((lst - 12.40).abs() < 1e-9);
    }

    #[test]
    fn load_replaces_on_duplicate_date() {
        let db = Database::new().unwrap();
        db.load_observations(SAMPLE_CSV).unwrap();
        let update = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05,2022,1,0.500,0.080,0.100,0.040,-0.110,0.038,12.00,1.80,84000
";
        db.load_observations(update).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3, "Should have 3 rows after upsert");

        let ndvi: f64 = conn
            .query_row(
                "SELECT NDVI_mean FROM observations WHERE date = '2022-01-05'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((ndvi - 0.500).abs() < 1e-9);
    }

    #[test]
    fn load_skips_rows_with_unparsable_values() {
        let db = Database::new().unwrap();
        let csv = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
2022-02-06,2022,2,no-data,0.091,0.097,0.044,-0.121,0.035,14.02,2.10,83950
2022-03-10,2022,3,0.455,0.088,0.103,0.042,-0.118,0.036,16.31,2.25,
";
        db.load_observations(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Rows with unparsable values should be skipped");
    }

    #[test]
    fn load_fails_when_required_column_missing() {
        let db = Database::new().unwrap();
        let csv = "\
date,NDVI_mean,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05,0.412,0.108,0.041,-0.112,0.038,12.40,1.85,84213
";
        let err = db.load_observations(csv).unwrap_err();
        match err {
            DashboardError::DataUnavailable(msg) => {
                assert!(msg.contains("NDVI_std"), "message should name the column: {}", msg)
            }
            other => panic!("expected DataUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn load_fails_on_unparsable_date() {
        let db = Database::new().unwrap();
        let csv = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
not-a-date,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
";
        let err = db.load_observations(csv).unwrap_err();
        assert!(
            matches!(err, DashboardError::DataUnavailable(_)),
            "expected DataUnavailable, got {:?}",
            err
        );
    }

    #[test]
    fn load_derives_year_and_month_from_date() {
        let db = Database::new().unwrap();
        // No year or month columns at all.
        let csv = "\
date,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2023-07-15,0.512,0.090,0.085,0.039,-0.131,0.034,29.70,3.05,84050
";
        db.load_observations(csv).unwrap();

        let conn = db.conn.borrow();
        let (year, month): (i32, i32) = conn
            .query_row(
                "SELECT year, month FROM observations WHERE date = '2023-07-15'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!((year, month), (2023, 7));
    }

    #[test]
    fn load_accepts_datetime_dates() {
        let db = Database::new().unwrap();
        let csv = "\
date,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05T10:23:11,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
";
        db.load_observations(csv).unwrap();

        let conn = db.conn.borrow();
        let date: String = conn
            .query_row("SELECT date FROM observations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(date, "2022-01-05", "Time component should be stripped");
    }
}
