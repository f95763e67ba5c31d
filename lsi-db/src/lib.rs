//! In-memory SQLite dataset layer for Landsat AOI index observations.
//!
//! This crate loads the exported per-scene zonal statistics CSV into an
//! in-memory SQLite database and exposes typed query methods for the
//! dashboard composition pipeline and the native CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the dashboard
//!   app, or from disk in the CLI
//! - Typed query methods returning serializable structs for JSON export
//!
//! # Usage
//!
//! ```rust
//! use lsi_core::index::{IndexConfig, IndexKind};
//! use lsi_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_observations(
//!     "date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count\n\
//!      2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213\n",
//! )
//! .unwrap();
//!
//! let ndvi = IndexConfig::for_kind(IndexKind::Ndvi);
//! let series = db.query_index_series(&ndvi, &[]).unwrap();
//! assert_eq!(series.len(), 1);
//! ```
//!
//! # Tables
//!
//! One wide table, `observations`, keyed by acquisition date, with mean and
//! standard deviation columns for each of the four indices plus the valid
//! pixel count for the scene. Column names match the CSV headers so the
//! static [`lsi_core::index::IndexConfig`] table is the single source of
//! column naming. See [`schema::create_schema`].

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the AOI observation history.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment. The dataset is loaded
/// once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_observations`](Self::load_observations) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ROW_CSV: &str = "\
date,year,month,NDVI_mean,NDVI_std,NDWI_mean,NDWI_std,NDBI_mean,NDBI_std,LST_mean_C,LST_std_C,count
2022-01-05,2022,1,0.412,0.085,0.108,0.041,-0.112,0.038,12.40,1.85,84213
";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_observations(ONE_ROW_CSV).unwrap();
        let years = db2.query_years().unwrap();
        assert_eq!(years, vec![2022], "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let years = db.query_years().unwrap();
        assert!(years.is_empty(), "New database should have no observations");
    }
}
