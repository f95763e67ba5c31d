use lsi_core::error::DashboardError;
use lsi_db::models::IndexObservation;
use serde::Serialize;

/// Descriptive statistics for one index over the selected scenes.
///
/// Values are unrounded. Display precision is applied when the render
/// plan is assembled, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSummary {
    /// Mean value of the most recent scene.
    pub current_value: f64,
    /// Change from the second-to-last scene to the last one. `None` when
    /// fewer than two scenes are available.
    pub delta_from_previous: Option<f64>,
    /// Lowest per-scene mean in the selection.
    pub min: f64,
    /// Highest per-scene mean in the selection.
    pub max: f64,
    /// Average of the per-scene means.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator) of the per-scene
    /// means. `None` when fewer than two scenes are available.
    pub std_dev: Option<f64>,
    /// Valid pixel count reported by the most recent scene.
    pub pixel_count_latest: i64,
    /// Earliest scene date in the selection, ISO `YYYY-MM-DD`.
    pub first_date: String,
    /// Latest scene date in the selection, ISO `YYYY-MM-DD`.
    pub last_date: String,
}

/// Reduce a series to its summary statistics.
///
/// The input is re-sorted by date internally, so callers do not have to
/// guarantee order. An empty series is `InsufficientData`.
pub fn summarize(series: &[IndexObservation]) -> Result<IndexSummary, DashboardError> {
    if series.is_empty() {
        return Err(DashboardError::InsufficientData(
            "no scenes in the current selection".to_string(),
        ));
    }

    let mut sorted: Vec<&IndexObservation> = series.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let n = sorted.len();
    let latest = sorted[n - 1];

    let delta_from_previous = if n >= 2 {
        Some(latest.mean - sorted[n - 2].mean)
    } else {
        None
    };

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for obs in &sorted {
        min = min.min(obs.mean);
        max = max.max(obs.mean);
        sum += obs.mean;
    }
    let mean = sum / n as f64;

    let std_dev = if n >= 2 {
        let squared: f64 = sorted.iter().map(|obs| (obs.mean - mean).powi(2)).sum();
        Some((squared / (n - 1) as f64).sqrt())
    } else {
        None
    };

    Ok(IndexSummary {
        current_value: latest.mean,
        delta_from_previous,
        min,
        max,
        mean,
        std_dev,
        pixel_count_latest: latest.pixel_count,
        first_date: sorted[0].date.clone(),
        last_date: latest.date.clone(),
    })
}
