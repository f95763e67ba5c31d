//! Command implementations for the LSI CLI.
//!
//! The CLI runs the same load/query/compose pipeline as the web dashboard
//! against files on disk, which makes it the quickest way to check a fresh
//! export before it ships to the WASM build.

use clap::Subcommand;
use log::info;
use lsi_compose::composer::{self, BoundaryState};
use lsi_compose::summary;
use lsi_core::index::{IndexConfig, IndexKind};
use lsi_core::selection::{MapStyle, SelectionState};
use lsi_db::Database;
use lsi_geo::boundary::Boundary;
use std::path::Path;

#[derive(Subcommand)]
pub enum Command {
    /// Validate a scene statistics CSV (and optionally an AOI boundary)
    Validate {
        /// Path to the per-scene statistics CSV
        #[arg(short = 'd', long)]
        data: String,

        /// Path to the AOI boundary GeoJSON
        #[arg(short = 'a', long)]
        aoi: Option<String>,
    },

    /// Print summary statistics for one index
    Summary {
        /// Path to the per-scene statistics CSV
        #[arg(short = 'd', long)]
        data: String,

        /// Index to summarize (ndvi, ndwi, ndbi, lst)
        #[arg(short = 'i', long, default_value = "ndvi")]
        index: IndexKind,

        /// Years to include, comma separated; omit for every year
        #[arg(short = 'y', long, value_delimiter = ',')]
        years: Vec<i32>,
    },

    /// Compose a full render plan and print it as JSON
    Plan {
        /// Path to the per-scene statistics CSV
        #[arg(short = 'd', long)]
        data: String,

        /// Path to the AOI boundary GeoJSON; omitted degrades the map panel
        #[arg(short = 'a', long)]
        aoi: Option<String>,

        /// Index to compose (ndvi, ndwi, ndbi, lst)
        #[arg(short = 'i', long, default_value = "ndvi")]
        index: IndexKind,

        /// Years to include, comma separated; omit for every year
        #[arg(short = 'y', long, value_delimiter = ',')]
        years: Vec<i32>,

        /// Use the satellite base layer in the map spec
        #[arg(long)]
        satellite: bool,

        /// Omit the std-dev error bars from the line chart spec
        #[arg(long)]
        no_variability: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { data, aoi } => run_validate(&data, aoi.as_deref()),
        Command::Summary { data, index, years } => run_summary(&data, index, &years),
        Command::Plan {
            data,
            aoi,
            index,
            years,
            satellite,
            no_variability,
        } => run_plan(&data, aoi.as_deref(), index, years, satellite, no_variability),
    }
}

/// Load the CSV (and AOI when given), then report what the dashboard
/// would see. Any taxonomy error propagates as a nonzero exit.
fn run_validate(data: &str, aoi: Option<&str>) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_observations_file(Path::new(data))?;

    let count = db.query_observation_count()?;
    let years = db.query_years()?;
    let (first, last) = db.query_date_range()?;
    info!("Validated {}", data);

    println!("scenes:     {}", count);
    println!("date range: {} to {}", first, last);
    println!("years:      {:?}", years);

    // Every configured column pair must be queryable, not just NDVI's.
    for config in IndexConfig::all() {
        let series = db.query_index_series(&config, &[])?;
        println!(
            "{:<5} {} / {}: {} values",
            config.short_label,
            config.mean_column,
            config.std_column,
            series.len()
        );
    }

    if let Some(aoi_path) = aoi {
        let boundary = Boundary::from_geojson_file(Path::new(aoi_path))?;
        let (lat, lon) = boundary.centroid();
        println!(
            "aoi:        {} feature(s), centroid ({:.4}, {:.4})",
            boundary.feature_count(),
            lat,
            lon
        );
    }

    println!("OK");
    Ok(())
}

fn run_summary(data: &str, index: IndexKind, years: &[i32]) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_observations_file(Path::new(data))?;

    let config = IndexConfig::for_kind(index);
    let series = db.query_index_series(&config, years)?;
    let summary = summary::summarize(&series)?;

    println!("{} summary over {} scenes", config.short_label, series.len());
    println!(
        "  current: {:.*}{}",
        config.decimals, summary.current_value, config.unit_suffix
    );
    match summary.delta_from_previous {
        Some(delta) => println!(
            "  delta:   {:+.*}{}",
            config.decimals, delta, config.unit_suffix
        ),
        None => println!("  delta:   N/A"),
    }
    println!(
        "  min:     {:.*}{}",
        config.decimals, summary.min, config.unit_suffix
    );
    println!(
        "  max:     {:.*}{}",
        config.decimals, summary.max, config.unit_suffix
    );
    println!(
        "  mean:    {:.*}{}",
        config.decimals, summary.mean, config.unit_suffix
    );
    match summary.std_dev {
        Some(std) => println!(
            "  std dev: {:.*}{}",
            config.decimals, std, config.unit_suffix
        ),
        None => println!("  std dev: N/A"),
    }
    println!("  pixels:  {} (latest scene)", summary.pixel_count_latest);
    println!("  span:    {} to {}", summary.first_date, summary.last_date);
    Ok(())
}

fn run_plan(
    data: &str,
    aoi: Option<&str>,
    index: IndexKind,
    years: Vec<i32>,
    satellite: bool,
    no_variability: bool,
) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_observations_file(Path::new(data))?;

    let boundary = match aoi {
        Some(path) => match Boundary::from_geojson_file(Path::new(path)) {
            Ok(boundary) => BoundaryState::Loaded(boundary),
            Err(e) => {
                log::warn!("AOI unavailable: {}", e);
                BoundaryState::Failed(e.to_string())
            }
        },
        None => BoundaryState::Failed("no AOI file provided".to_string()),
    };

    let selection = SelectionState {
        years,
        map_style: if satellite {
            MapStyle::Satellite
        } else {
            MapStyle::Standard
        },
        show_variability: !no_variability,
    };

    let config = IndexConfig::for_kind(index);
    let plan = composer::compose(&db, &boundary, &config, &selection)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
