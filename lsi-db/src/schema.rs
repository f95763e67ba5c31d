//! SQL schema for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the SQL schema as a single batch string.
///
/// One wide table, `observations`, holds the per-scene zonal statistics for
/// every index. The acquisition date is the primary key: the export pipeline
/// produces at most one row per scene date, so dates are unique within every
/// per-index series.
///
/// Index column names deliberately match the CSV headers
/// (`NDVI_mean`, `LST_std_C`, ...) so queries can take column names straight
/// from the static index configuration table.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS observations (
        date TEXT PRIMARY KEY,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        NDVI_mean REAL NOT NULL,
        NDVI_std REAL NOT NULL,
        NDWI_mean REAL NOT NULL,
        NDWI_std REAL NOT NULL,
        NDBI_mean REAL NOT NULL,
        NDBI_std REAL NOT NULL,
        LST_mean_C REAL NOT NULL,
        LST_std_C REAL NOT NULL,
        pixel_count INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_obs_year ON observations(year);
    CREATE INDEX IF NOT EXISTS idx_obs_year_month ON observations(year, month);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_observations_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='observations'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "Table 'observations' should exist");
    }

    #[test]
    fn schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for idx in &["idx_obs_year", "idx_obs_year_month"] {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='{}'",
                        idx
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Index '{}' should exist", idx);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
